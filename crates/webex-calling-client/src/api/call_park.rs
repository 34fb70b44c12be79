//! Call park and call pickup (`telephony/config/callParks`, `telephony/config/callPickups`).

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{
    AvailableAgent, CallPark, CallParkDetails, CallParkExtension, CallParkSettings, CallPickup,
    CallPickupDetails,
};

use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;

/// Filters of the `available_agents` lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableAgentListParams {
    /// Only agents whose name contains this text
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

/// Filters of [`CallParkApi::list_extensions`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParkExtensionListParams {
    pub location_id: Option<String>,
    pub location_name: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

location_feature_api! {
    /// Call parks (`telephony/config/callParks`).
    CallParkApi {
        collection: "callParks",
        list_key: "callParks",
        summary: CallPark,
        details: CallParkDetails,
        body: CallParkDetails,
    }
}

impl CallParkApi {
    pub async fn read_settings(&self, location_id: &str, org_id: Option<&str>) -> Result<CallParkSettings> {
        let url = self.feature.url(location_id, Some("settings"));
        self.feature.child().get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_settings(
        &self,
        location_id: &str,
        settings: &CallParkSettings,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.feature.url(location_id, Some("settings"));
        self.feature.child().put_empty(&url, &QueryParams::org_id(org_id), settings).await
    }

    /// People and workspaces at the location that can be added to a call park.
    pub fn available_agents(
        &self,
        location_id: &str,
        params: &AvailableAgentListParams,
    ) -> ItemStream<AvailableAgent> {
        let url = self.feature.url(location_id, Some("availableUsers"));
        self.feature.child().paginate_filtered(url, params, "agents")
    }

    /// Org-wide list of call park extensions.
    pub fn list_extensions(&self, params: &CallParkExtensionListParams) -> ItemStream<CallParkExtension> {
        let child = self.feature.child();
        child.paginate_filtered(child.ep(Some("callParkExtensions")), params, "callParkExtensions")
    }

    fn extension_url(&self, location_id: &str, extension_id: Option<&str>) -> String {
        let path = match extension_id {
            Some(id) => format!("locations/{location_id}/callParkExtensions/{id}"),
            None => format!("locations/{location_id}/callParkExtensions"),
        };
        self.feature.child().ep(Some(&path))
    }

    pub async fn create_extension(
        &self,
        location_id: &str,
        name: &str,
        extension: &str,
        org_id: Option<&str>,
    ) -> Result<String> {
        let body = CallParkExtension {
            name: Some(name.to_string()),
            extension: Some(extension.to_string()),
            ..Default::default()
        };
        self.feature
            .child()
            .post_for_id(&self.extension_url(location_id, None), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn extension_details(
        &self,
        location_id: &str,
        extension_id: &str,
        org_id: Option<&str>,
    ) -> Result<CallParkExtension> {
        self.feature
            .child()
            .get(&self.extension_url(location_id, Some(extension_id)), &QueryParams::org_id(org_id))
            .await
    }

    pub async fn update_extension(
        &self,
        location_id: &str,
        extension_id: &str,
        name: Option<&str>,
        extension: Option<&str>,
        org_id: Option<&str>,
    ) -> Result<()> {
        let body = CallParkExtension {
            name: name.map(str::to_string),
            extension: extension.map(str::to_string),
            ..Default::default()
        };
        self.feature
            .child()
            .put_empty(&self.extension_url(location_id, Some(extension_id)), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn delete_extension(&self, location_id: &str, extension_id: &str, org_id: Option<&str>) -> Result<()> {
        self.feature
            .child()
            .delete(&self.extension_url(location_id, Some(extension_id)), &QueryParams::org_id(org_id))
            .await
    }
}

location_feature_api! {
    /// Call pickup groups (`telephony/config/callPickups`).
    CallPickupApi {
        collection: "callPickups",
        list_key: "callPickups",
        summary: CallPickup,
        details: CallPickupDetails,
        body: CallPickupDetails,
    }
}

impl CallPickupApi {
    /// People and workspaces at the location that can join a pickup group.
    pub fn available_agents(
        &self,
        location_id: &str,
        params: &AvailableAgentListParams,
    ) -> ItemStream<AvailableAgent> {
        let url = self.feature.url(location_id, Some("availableUsers"));
        self.feature.child().paginate_filtered(url, params, "agents")
    }
}
