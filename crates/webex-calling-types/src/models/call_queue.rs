//! Call queue models (`telephony/config/queues`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{AlternateNumberSettings, AudioFile, Greeting, RingPattern, UserType};

string_enum! {
    /// Routing type of a call queue.
    pub enum RoutingType {
        PriorityBased => "PRIORITY_BASED",
        SkillBased => "SKILL_BASED",
    }
}

string_enum! {
    /// Order in which agents are offered calls.
    pub enum HuntPolicy {
        Circular => "CIRCULAR",
        Regular => "REGULAR",
        Simultaneous => "SIMULTANEOUS",
        Uniform => "UNIFORM",
        Weighted => "WEIGHTED",
    }
}

string_enum! {
    /// What happens to calls once the queue overflows.
    pub enum OverflowAction {
        PerformBusyTreatment => "PERFORM_BUSY_TREATMENT",
        PlayRingingUntilCallerHangsUp => "PLAY_RINGING_UNTIL_CALLER_HANGS_UP",
        TransferToPhoneNumber => "TRANSFER_TO_PHONE_NUMBER",
    }
}

string_enum! {
    /// Content of the periodic wait message.
    pub enum WaitMessageMode {
        Time => "TIME",
        Position => "POSITION",
    }
}

/// Queue summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub enabled: Option<bool>,
}

/// Call bounce settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallBounce {
    pub call_bounce_enabled: Option<bool>,
    pub call_bounce_max_rings: Option<i64>,
    pub agent_unavailable_enabled: Option<bool>,
    pub alert_agent_enabled: Option<bool>,
    pub alert_agent_max_seconds: Option<i64>,
    pub call_bounce_on_hold_enabled: Option<bool>,
    pub call_bounce_on_hold_max_seconds: Option<i64>,
}

/// Distinctive ring for queue calls.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctiveRing {
    pub enabled: Option<bool>,
    pub ring_pattern: Option<RingPattern>,
}

/// Routing policies of a call queue.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueuePolicy {
    pub routing_type: Option<RoutingType>,
    pub policy: Option<HuntPolicy>,
    pub call_bounce: Option<CallBounce>,
    pub distinctive_ring: Option<DistinctiveRing>,
}

/// Overflow handling.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverflowSetting {
    pub action: Option<OverflowAction>,
    pub send_to_voicemail: Option<bool>,
    pub transfer_number: Option<String>,
    pub is_transfer_number_set: Option<bool>,
    pub overflow_after_wait_enabled: Option<bool>,
    pub overflow_after_wait_time: Option<i64>,
    pub play_overflow_greeting_enabled: Option<bool>,
    pub greeting: Option<Greeting>,
    pub audio_files: Option<Vec<String>>,
}

/// Message played when a call enters the queue.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeMessage {
    pub enabled: Option<bool>,
    pub always_enabled: Option<bool>,
    pub greeting: Option<Greeting>,
    pub audio_announcement_files: Option<Vec<AudioFile>>,
}

/// Estimated-wait or queue-position message.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitMessage {
    pub enabled: Option<bool>,
    pub wait_mode: Option<WaitMessageMode>,
    pub handling_time: Option<i64>,
    pub default_handling_time: Option<i64>,
    pub queue_position: Option<i64>,
    pub high_volume_message_enabled: Option<bool>,
    pub estimated_waiting_time: Option<i64>,
    pub callback_option_enabled: Option<bool>,
    pub minimum_estimated_callback_time: Option<i64>,
    pub international_callback_enabled: Option<bool>,
    pub play_updated_estimated_wait_message: Option<String>,
}

/// Comfort message repeated while waiting.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortMessage {
    pub enabled: Option<bool>,
    pub time_between_messages: Option<i64>,
    pub greeting: Option<Greeting>,
    pub audio_announcement_files: Option<Vec<AudioFile>>,
}

/// One music-on-hold source.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MohSource {
    pub enabled: Option<bool>,
    pub greeting: Option<Greeting>,
    pub audio_announcement_files: Option<Vec<AudioFile>>,
}

/// Music on hold.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MohMessage {
    pub normal_source: Option<MohSource>,
    pub alternate_source: Option<MohSource>,
}

/// Queue behaviour while callers wait.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueueSettings {
    pub queue_size: Option<i64>,
    pub call_offer_tone_enabled: Option<bool>,
    pub reset_call_statistics_enabled: Option<bool>,
    pub overflow: Option<OverflowSetting>,
    pub welcome_message: Option<WelcomeMessage>,
    pub wait_message: Option<WaitMessage>,
    pub comfort_message: Option<ComfortMessage>,
    pub moh_message: Option<MohMessage>,
}

/// Agent of a call queue or hunt group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub routing_prefix: Option<String>,
    pub esn: Option<String>,
    /// Weight for `WEIGHTED` queues
    pub weight: Option<String>,
    /// Skill level for `SKILL_BASED` queues
    pub skill_level: Option<i64>,
    pub join_enabled: Option<bool>,
    #[serde(rename = "type")]
    pub agent_type: Option<UserType>,
}

/// Full configuration of a call queue.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueueDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time_zone: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub alternate_number_settings: Option<AlternateNumberSettings>,
    pub call_policies: Option<CallQueuePolicy>,
    pub queue_settings: Option<CallQueueSettings>,
    pub allow_call_waiting_for_agents_enabled: Option<bool>,
    pub allow_agent_join_enabled: Option<bool>,
    pub phone_number_for_outgoing_calls_enabled: Option<bool>,
    pub agents: Option<Vec<Agent>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_queue_details_nested_policy() {
        let details: CallQueueDetails = serde_json::from_value(json!({
            "id": "q1",
            "name": "Support",
            "callPolicies": {
                "routingType": "PRIORITY_BASED",
                "policy": "CIRCULAR",
                "callBounce": {"callBounceEnabled": true, "callBounceMaxRings": 5},
                "distinctiveRing": {"enabled": true, "ringPattern": "SHORT_LONG_SHORT"}
            },
            "queueSettings": {
                "queueSize": 10,
                "overflow": {"action": "PERFORM_BUSY_TREATMENT", "greeting": "DEFAULT"},
                "waitMessage": {"enabled": false, "waitMode": "POSITION"}
            },
            "agents": [{"id": "a1", "type": "PEOPLE", "weight": "50"}]
        }))
        .unwrap();

        let policy = details.call_policies.unwrap();
        assert_eq!(policy.policy, Some(HuntPolicy::Circular));
        assert_eq!(policy.call_bounce.unwrap().call_bounce_max_rings, Some(5));
        let settings = details.queue_settings.unwrap();
        assert_eq!(settings.overflow.unwrap().action, Some(OverflowAction::PerformBusyTreatment));
        assert_eq!(settings.wait_message.unwrap().wait_mode, Some(WaitMessageMode::Position));
        assert_eq!(details.agents.unwrap()[0].agent_type, Some(UserType::People));
    }

    #[test]
    fn test_partial_update_serializes_only_changes() {
        let update = CallQueueDetails {
            queue_settings: Some(CallQueueSettings { queue_size: Some(25), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"queueSettings": {"queueSize": 25}}));
    }

    #[test]
    fn test_details_round_trip() {
        let queue = CallQueueDetails {
            name: Some("Support".to_string()),
            enabled: Some(true),
            extension: Some("4000".to_string()),
            call_policies: Some(CallQueuePolicy {
                routing_type: Some(RoutingType::SkillBased),
                policy: Some(HuntPolicy::Circular),
                call_bounce: Some(CallBounce { call_bounce_max_rings: Some(5), ..Default::default() }),
                ..Default::default()
            }),
            queue_settings: Some(CallQueueSettings {
                queue_size: Some(10),
                overflow: Some(OverflowSetting {
                    action: Some(OverflowAction::TransferToPhoneNumber),
                    transfer_number: Some("+14085550199".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            agents: Some(vec![Agent {
                id: Some("p1".to_string()),
                skill_level: Some(3),
                agent_type: Some(UserType::People),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let value = serde_json::to_value(&queue).unwrap();
        assert_eq!(value["agents"][0]["type"], json!("PEOPLE"));
        assert_eq!(serde_json::from_value::<CallQueueDetails>(value).unwrap(), queue);
    }
}
