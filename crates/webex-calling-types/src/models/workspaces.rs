//! Workspace models (`workspaces`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// Physical kind of workspace.
    pub enum WorkspaceType {
        NotSet => "notSet",
        Focus => "focus",
        Huddle => "huddle",
        MeetingRoom => "meetingRoom",
        Open => "open",
        Desk => "desk",
        Other => "other",
    }
}

string_enum! {
    /// Calling service of a workspace.
    pub enum WorkspaceCallingType {
        FreeCalling => "freeCalling",
        HybridCalling => "hybridCalling",
        WebexCalling => "webexCalling",
        WebexEdgeForDevices => "webexEdgeForDevices",
        ThirdPartySipCalling => "thirdPartySipCalling",
        None => "none",
    }
}

string_enum! {
    /// Calendar service of a workspace.
    pub enum CalendarType {
        None => "none",
        Google => "google",
        Microsoft => "microsoft",
    }
}

string_enum! {
    /// Hot desking availability.
    pub enum HotdeskingStatus {
        On => "on",
        Off => "off",
    }
}

string_enum! {
    /// Device families a workspace supports.
    pub enum WorkspaceSupportedDevices {
        CollaborationDevices => "collaborationDevices",
        Phones => "phones",
    }
}

/// Hybrid calling details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridCalling {
    pub email_address: Option<String>,
}

/// Webex Calling details of a workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebexCalling {
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub location_id: Option<String>,
    pub licenses: Option<Vec<String>>,
}

/// Calling configuration of a workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCalling {
    #[serde(rename = "type")]
    pub calling_type: Option<WorkspaceCallingType>,
    pub hybrid_calling: Option<HybridCalling>,
    pub webex_calling: Option<WebexCalling>,
}

/// Calendar configuration of a workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCalendar {
    #[serde(rename = "type")]
    pub calendar_type: Option<CalendarType>,
    pub email_address: Option<String>,
    pub resource_group_id: Option<String>,
}

/// Webex workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Option<String>,
    pub org_id: Option<String>,
    pub location_id: Option<String>,
    pub workspace_location_id: Option<String>,
    pub floor_id: Option<String>,
    pub display_name: Option<String>,
    pub capacity: Option<i64>,
    #[serde(rename = "type")]
    pub workspace_type: Option<WorkspaceType>,
    pub sip_address: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub calling: Option<WorkspaceCalling>,
    pub calendar: Option<WorkspaceCalendar>,
    pub hotdesking_status: Option<HotdeskingStatus>,
    pub supported_devices: Option<WorkspaceSupportedDevices>,
    pub notes: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workspace_calling_nested() {
        let workspace: Workspace = serde_json::from_value(json!({
            "id": "ws1",
            "displayName": "Lobby",
            "type": "open",
            "calling": {
                "type": "webexCalling",
                "webexCalling": {"extension": "5001", "locationId": "loc1"}
            },
            "supportedDevices": "phones"
        }))
        .unwrap();

        assert_eq!(workspace.workspace_type, Some(WorkspaceType::Open));
        let calling = workspace.calling.unwrap();
        assert_eq!(calling.calling_type, Some(WorkspaceCallingType::WebexCalling));
        assert_eq!(calling.webex_calling.unwrap().extension.as_deref(), Some("5001"));
        assert_eq!(workspace.supported_devices, Some(WorkspaceSupportedDevices::Phones));
    }
}
