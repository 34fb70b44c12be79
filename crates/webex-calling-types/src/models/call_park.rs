//! Call park and call pickup models.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{PersonPlaceAgent, RingPattern, UserType};

string_enum! {
    /// Who is alerted when a parked call is recalled.
    pub enum RecallOption {
        AlertParkingUserOnly => "ALERT_PARKING_USER_ONLY",
        AlertParkingUserFirstThenHuntGroup => "ALERT_PARKING_USER_FIRST_THEN_HUNT_GROUP",
        AlertHuntGroupOnly => "ALERT_HUNT_GROUP_ONLY",
    }
}

string_enum! {
    /// How pickup group members are notified of a ringing call.
    pub enum PickupNotificationType {
        None => "NONE",
        AudioOnly => "AUDIO_ONLY",
        VisualOnly => "VISUAL_ONLY",
        AudioAndVisual => "AUDIO_AND_VISUAL",
    }
}

/// Call park summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPark {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
}

/// Hunt group used for call park recall.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallHuntGroup {
    pub hunt_group_id: Option<String>,
    pub hunt_group_name: Option<String>,
    pub option: Option<RecallOption>,
}

/// Full configuration of a call park.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParkDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub recall: Option<RecallHuntGroup>,
    pub agents: Option<Vec<PersonPlaceAgent>>,
    pub park_on_agents_enabled: Option<bool>,
    pub call_park_extensions: Option<Vec<CallParkExtension>>,
}

/// Timers and ring pattern of call park at a location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParkSettingsBody {
    pub ring_pattern: Option<RingPattern>,
    /// Seconds before a parked call is recalled
    pub recall_time: Option<i64>,
    /// Seconds before the recall goes to the hunt group
    pub hunt_wait_time: Option<i64>,
}

/// Location-wide call park settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParkSettings {
    pub call_park_recall: Option<RecallHuntGroup>,
    pub call_park_settings: Option<CallParkSettingsBody>,
}

/// Call park extension.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParkExtension {
    pub id: Option<String>,
    pub name: Option<String>,
    pub extension: Option<String>,
    pub routing_prefix: Option<String>,
    pub esn: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
}

/// Person or workspace that can be added to a call park or pickup group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableAgent {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub agent_type: Option<UserType>,
    pub email: Option<String>,
    pub numbers: Option<Vec<AvailableAgentNumber>>,
}

/// Number of an [`AvailableAgent`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableAgentNumber {
    pub external: Option<String>,
    pub extension: Option<String>,
    pub primary: Option<bool>,
}

/// Call pickup summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPickup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
}

/// Full configuration of a call pickup group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPickupDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub notification_type: Option<PickupNotificationType>,
    pub notification_delay_timer_seconds: Option<i64>,
    pub agents: Option<Vec<PersonPlaceAgent>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_park_settings_parse() {
        let settings: CallParkSettings = serde_json::from_value(json!({
            "callParkRecall": {
                "huntGroupId": "hg1",
                "option": "ALERT_PARKING_USER_FIRST_THEN_HUNT_GROUP"
            },
            "callParkSettings": {"ringPattern": "NORMAL", "recallTime": 45, "huntWaitTime": 45}
        }))
        .unwrap();

        assert_eq!(
            settings.call_park_recall.unwrap().option,
            Some(RecallOption::AlertParkingUserFirstThenHuntGroup)
        );
        assert_eq!(settings.call_park_settings.unwrap().recall_time, Some(45));
    }

    #[test]
    fn test_pickup_notification_none_variant() {
        let pickup: CallPickupDetails =
            serde_json::from_value(json!({"notificationType": "NONE"})).unwrap();
        assert_eq!(pickup.notification_type, Some(PickupNotificationType::None));
    }
}
