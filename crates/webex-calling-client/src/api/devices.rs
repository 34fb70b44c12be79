//! Devices (`devices`) and their calling configuration (`telephony/config/devices`).

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{
    ActivationCode, ConnectionStatus, Device, DeviceCreateBody, DeviceMembers, TagOp, TagOperation,
};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

const JSON_PATCH: &str = "application/json-patch+json";

/// Filters of [`DevicesApi::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceListParams {
    pub person_id: Option<String>,
    pub workspace_id: Option<String>,
    pub location_id: Option<String>,
    pub display_name: Option<String>,
    pub product: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    /// Comma separated tags, all must match
    pub tag: Option<String>,
    pub connection_status: Option<ConnectionStatus>,
    pub serial: Option<String>,
    pub software: Option<String>,
    pub upgrade_channel: Option<String>,
    pub error_code: Option<String>,
    pub capability: Option<String>,
    pub permission: Option<String>,
    pub mac: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

pub struct DevicesApi {
    child: ApiChild,
}

impl DevicesApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "devices") }
    }

    pub fn list(&self, params: &DeviceListParams) -> ItemStream<Device> {
        self.child.paginate_filtered(self.child.ep(None), params, "items")
    }

    pub async fn details(&self, device_id: &str, org_id: Option<&str>) -> Result<Device> {
        self.child.get(&self.child.ep(Some(device_id)), &QueryParams::org_id(org_id)).await
    }

    pub async fn delete(&self, device_id: &str, org_id: Option<&str>) -> Result<()> {
        self.child.delete(&self.child.ep(Some(device_id)), &QueryParams::org_id(org_id)).await
    }

    /// Activation code for a new device owned by a workspace or person.
    pub async fn activation_code(
        &self,
        workspace_id: Option<&str>,
        person_id: Option<&str>,
        model: Option<&str>,
        org_id: Option<&str>,
    ) -> Result<ActivationCode> {
        let body = DeviceCreateBody {
            workspace_id: workspace_id.map(str::to_string),
            person_id: person_id.map(str::to_string),
            model: model.map(str::to_string),
            ..Default::default()
        };
        self.child
            .post(&self.child.ep(Some("activationCode")), &QueryParams::org_id(org_id), &body)
            .await
    }

    /// Register a device by MAC address.
    pub async fn create_by_mac(
        &self,
        mac: &str,
        workspace_id: Option<&str>,
        person_id: Option<&str>,
        model: Option<&str>,
        password: Option<&str>,
        org_id: Option<&str>,
    ) -> Result<Device> {
        let body = DeviceCreateBody {
            mac: Some(mac.to_string()),
            workspace_id: workspace_id.map(str::to_string),
            person_id: person_id.map(str::to_string),
            model: model.map(str::to_string),
            password: password.map(str::to_string),
        };
        self.child.post(&self.child.ep(None), &QueryParams::org_id(org_id), &body).await
    }

    /// Add, remove or replace device tags with a JSON patch.
    pub async fn modify_tags(
        &self,
        device_id: &str,
        op: TagOperation,
        tags: Vec<String>,
        org_id: Option<&str>,
    ) -> Result<Device> {
        let body = vec![TagOp::tags(op, tags)];
        self.child
            .patch(&self.child.ep(Some(device_id)), &QueryParams::org_id(org_id), &body, Some(JSON_PATCH))
            .await
    }
}

pub struct TelephonyDevicesApi {
    child: ApiChild,
}

impl TelephonyDevicesApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config/devices") }
    }

    /// Lines configured on a device.
    pub async fn members(&self, device_id: &str, org_id: Option<&str>) -> Result<DeviceMembers> {
        let url = self.child.ep(Some(&format!("{device_id}/members")));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    /// Push pending configuration changes to the device.
    pub async fn apply_changes(&self, device_id: &str, org_id: Option<&str>) -> Result<()> {
        let url = self.child.ep(Some(&format!("{device_id}/actions/applyChanges/invoke")));
        self.child.post_empty::<()>(&url, &QueryParams::org_id(org_id), None).await
    }
}
