//! Call control models (`telephony/calls`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// State of an active call.
    pub enum CallState {
        Connecting => "connecting",
        Alerting => "alerting",
        Connected => "connected",
        Held => "held",
        RemoteHeld => "remoteHeld",
        Disconnected => "disconnected",
    }
}

string_enum! {
    /// Role of the user in a call.
    pub enum CallPersonality {
        Originator => "originator",
        Terminator => "terminator",
        ClickToDial => "clickToDial",
    }
}

string_enum! {
    /// Classification of the remote party.
    pub enum CallType {
        Location => "location",
        Organization => "organization",
        External => "external",
        Emergency => "emergency",
        Repair => "repair",
        Other => "other",
    }
}

string_enum! {
    /// Why a call was redirected.
    pub enum RedirectionReason {
        Busy => "busy",
        NoAnswer => "noAnswer",
        Unavailable => "unavailable",
        Unconditional => "unconditional",
        TimeOfDay => "timeOfDay",
        Divert => "divert",
        FollowMe => "followMe",
        HuntGroup => "huntGroup",
        CallQueue => "callQueue",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Kind of recall.
    pub enum RecallType {
        Park => "park",
    }
}

string_enum! {
    /// Recording state of a call.
    pub enum RecordingState {
        Pending => "pending",
        Started => "started",
        Paused => "paused",
        Stopped => "stopped",
        Failed => "failed",
    }
}

string_enum! {
    /// Treatment applied when rejecting an incoming call.
    pub enum RejectAction {
        Busy => "busy",
        TemporarilyUnavailable => "temporarilyUnavailable",
        Ignore => "ignore",
    }
}

string_enum! {
    /// Call history entry type.
    pub enum CallHistoryType {
        Placed => "placed",
        Missed => "missed",
        Received => "received",
    }
}

/// Party taking part in a call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyInformation {
    pub name: Option<String>,
    pub number: Option<String>,
    pub person_id: Option<String>,
    pub place_id: Option<String>,
    pub privacy_enabled: Option<bool>,
    pub call_type: Option<CallType>,
}

/// Redirection hop of a call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectionInformation {
    pub reason: Option<RedirectionReason>,
    pub redirecting_party: Option<PartyInformation>,
}

/// Recall details of a parked call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallInformation {
    #[serde(rename = "type")]
    pub recall_type: Option<RecallType>,
    pub party: Option<PartyInformation>,
}

/// An active call of the authenticated user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: Option<String>,
    pub call_session_id: Option<String>,
    pub personality: Option<CallPersonality>,
    pub state: Option<CallState>,
    pub remote_party: Option<PartyInformation>,
    pub appearance: Option<i64>,
    pub created: Option<DateTime<Utc>>,
    pub answered: Option<DateTime<Utc>>,
    pub redirections: Option<Vec<RedirectionInformation>>,
    pub recall: Option<RecallInformation>,
    pub recording_state: Option<RecordingState>,
}

/// Call history entry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallHistoryRecord {
    #[serde(rename = "type")]
    pub history_type: Option<CallHistoryType>,
    pub name: Option<String>,
    pub number: Option<String>,
    pub privacy_enabled: Option<bool>,
    pub time: Option<DateTime<Utc>>,
}

/// Response of dial, retrieve, pickup and barge-in.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialResponse {
    pub call_id: Option<String>,
    pub call_session_id: Option<String>,
}

/// Response of park.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkResponse {
    pub parked_against: Option<PartyInformation>,
}

/// Body of dial.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialBody {
    pub destination: Option<String>,
    pub endpoint_id: Option<String>,
}

/// Body of answer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerBody {
    pub call_id: Option<String>,
    pub endpoint_id: Option<String>,
}

/// Body of reject.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectBody {
    pub call_id: Option<String>,
    pub action: Option<RejectAction>,
}

/// Body of actions that only name the call (hangup, hold, resume, push, recording).
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallIdBody {
    pub call_id: Option<String>,
}

/// Body of divert.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivertBody {
    pub call_id: Option<String>,
    pub destination: Option<String>,
    pub to_voicemail: Option<bool>,
}

/// Body of transfer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody {
    pub call_id1: Option<String>,
    pub call_id2: Option<String>,
    pub destination: Option<String>,
}

/// Body of park.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkBody {
    pub call_id: Option<String>,
    pub destination: Option<String>,
    pub is_group_park: Option<bool>,
}

/// Body of transmit DTMF.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransmitDtmfBody {
    pub call_id: Option<String>,
    pub dtmf: Option<String>,
}

/// Body of pickup and barge-in.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetBody {
    pub target: Option<String>,
    pub endpoint_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_parses_nested_parties() {
        let call: Call = serde_json::from_value(json!({
            "id": "Y2lzY29zcGFyazovL3VzL0NBTEwvNWQ3",
            "callSessionId": "MmFmNThiZjktYWE3Ny00NWE5LThiMDEtYzI4NDMxZWYwNzRm",
            "personality": "originator",
            "state": "connected",
            "remoteParty": {
                "name": "Bob Smith",
                "number": "+12223334444",
                "privacyEnabled": false,
                "callType": "external"
            },
            "appearance": 1,
            "created": "2016-04-21T17:00:00.000Z",
            "redirections": [{"reason": "noAnswer", "redirectingParty": {"number": "1234"}}],
            "somethingNew": true
        }))
        .unwrap();

        assert_eq!(call.state, Some(CallState::Connected));
        assert_eq!(call.personality, Some(CallPersonality::Originator));
        let remote = call.remote_party.unwrap();
        assert_eq!(remote.call_type, Some(CallType::External));
        assert_eq!(remote.privacy_enabled, Some(false));
        let redirections = call.redirections.unwrap();
        assert_eq!(redirections[0].reason, Some(RedirectionReason::NoAnswer));
        assert!(call.created.is_some());
        assert!(call.answered.is_none());
    }

    #[test]
    fn test_dial_body_only_destination() {
        let body = DialBody { destination: Some("1234".to_string()), ..Default::default() };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"destination": "1234"}));
    }

    #[test]
    fn test_transfer_body_keys() {
        let body = TransferBody {
            call_id1: Some("a".to_string()),
            call_id2: Some("b".to_string()),
            destination: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"callId1": "a", "callId2": "b"}));
    }

    #[test]
    fn test_unrecognised_call_state_kept() {
        let call: Call = serde_json::from_value(json!({"state": "onConsult"})).unwrap();
        assert_eq!(call.state, Some(CallState::Unrecognized("onConsult".to_string())));
    }
}
