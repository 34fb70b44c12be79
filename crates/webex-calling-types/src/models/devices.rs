//! Device models (`devices`, `telephony/config/devices`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{IdAndName, UserType};

string_enum! {
    /// Cloud connection state of a device.
    pub enum ConnectionStatus {
        Connected => "connected",
        Disconnected => "disconnected",
        ConnectedWithIssues => "connected_with_issues",
        OfflineExpired => "offline_expired",
        Activating => "activating",
        Unknown => "unknown",
        OfflineDeep => "offline_deep_storage",
    }
}

string_enum! {
    /// JSON patch operation on device tags.
    pub enum TagOperation {
        Add => "add",
        Remove => "remove",
        Replace => "replace",
    }
}

/// Webex device.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub workspace_id: Option<String>,
    pub person_id: Option<String>,
    pub org_id: Option<String>,
    pub capabilities: Option<Vec<String>>,
    pub permissions: Option<Vec<String>>,
    pub connection_status: Option<ConnectionStatus>,
    pub product: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ip: Option<String>,
    pub active_interface: Option<String>,
    pub mac: Option<String>,
    pub primary_sip_url: Option<String>,
    pub sip_urls: Option<Vec<String>>,
    pub serial: Option<String>,
    pub software: Option<String>,
    pub upgrade_channel: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub location_id: Option<String>,
    pub workspace_location_id: Option<String>,
    pub error_codes: Option<Vec<String>>,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    pub managed_by: Option<String>,
    pub device_platform: Option<String>,
}

/// One operation of a tag patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOp {
    pub op: TagOperation,
    pub path: String,
    pub value: Vec<String>,
}

impl TagOp {
    /// Operation on the `tags` path.
    pub fn tags(op: TagOperation, tags: Vec<String>) -> Self {
        Self { op, path: "tags".to_string(), value: tags }
    }
}

/// Activation code for onboarding a device.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationCode {
    pub code: Option<String>,
    pub expiry_time: Option<DateTime<Utc>>,
}

/// Body of activation code and create-by-MAC requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCreateBody {
    pub mac: Option<String>,
    pub workspace_id: Option<String>,
    pub person_id: Option<String>,
    pub model: Option<String>,
    pub password: Option<String>,
}

/// Line appearance on a calling device.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMember {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub line_port: Option<String>,
    pub primary_owner: Option<bool>,
    pub port: Option<i64>,
    pub t38_fax_compression_enabled: Option<bool>,
    pub line_type: Option<String>,
    pub member_type: Option<UserType>,
    pub location: Option<IdAndName>,
}

/// Members of a calling device.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMembers {
    pub model: Option<String>,
    pub members: Option<Vec<DeviceMember>>,
    pub max_line_count: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_op_shape() {
        let op = TagOp::tags(TagOperation::Add, vec!["lobby".to_string()]);
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "add", "path": "tags", "value": ["lobby"]})
        );
    }

    #[test]
    fn test_device_connection_status() {
        let device: Device = serde_json::from_value(json!({
            "id": "d1",
            "connectionStatus": "connected_with_issues",
            "type": "roomdesk",
            "tags": []
        }))
        .unwrap();

        assert_eq!(device.connection_status, Some(ConnectionStatus::ConnectedWithIssues));
        assert_eq!(device.tags, Some(vec![]));
    }
}
