//! Per-person call settings (`people/{personId}/features/...`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{Greeting, RingPattern};
use super::forwarding::ForwardAlways;
use super::voicemail_group::{
    EmailCopyOfMessage, FaxMessage, MessageStorage, TransferToNumber, VoicemailNotifications,
};

string_enum! {
    /// Caller ID presented on outbound calls.
    pub enum CallerIdSelectedType {
        DirectLine => "DIRECT_LINE",
        LocationNumber => "LOCATION_NUMBER",
        MobileNumber => "MOBILE_NUMBER",
        Custom => "CUSTOM",
    }
}

string_enum! {
    /// Source of the external caller ID name.
    pub enum ExternalCallerIdNamePolicy {
        DirectLine => "DIRECT_LINE",
        Location => "LOCATION",
        Other => "OTHER",
    }
}

string_enum! {
    /// Outgoing call class governed by calling permissions.
    pub enum OutgoingCallType {
        InternalCall => "INTERNAL_CALL",
        Local => "LOCAL",
        TollFree => "TOLL_FREE",
        Toll => "TOLL",
        National => "NATIONAL",
        International => "INTERNATIONAL",
        OperatorAssisted => "OPERATOR_ASSISTED",
        ChargeableDirectoryAssisted => "CHARGEABLE_DIRECTORY_ASSISTED",
        SpecialServicesI => "SPECIAL_SERVICES_I",
        SpecialServicesII => "SPECIAL_SERVICES_II",
        PremiumServicesI => "PREMIUM_SERVICES_I",
        PremiumServicesII => "PREMIUM_SERVICES_II",
    }
}

string_enum! {
    /// Permission applied to an outgoing call class.
    pub enum OutgoingAction {
        Allow => "ALLOW",
        Block => "BLOCK",
        AuthCode => "AUTH_CODE",
        TransferNumber1 => "TRANSFER_NUMBER_1",
        TransferNumber2 => "TRANSFER_NUMBER_2",
        TransferNumber3 => "TRANSFER_NUMBER_3",
    }
}

string_enum! {
    /// When calls are recorded.
    pub enum RecordingMode {
        Always => "Always",
        Never => "Never",
        AlwaysWithPause => "Always with Pause/Resume",
        OnDemand => "On Demand with User Initiated Start",
    }
}

string_enum! {
    /// How the parties are told the call is recorded.
    pub enum RecordingNotificationType {
        None => "None",
        Beep => "Beep",
        PlayAnnouncement => "Play Announcement",
    }
}

string_enum! {
    /// Call intercept mode.
    pub enum InterceptType {
        InterceptAll => "INTERCEPT_ALL",
        AllowAll => "ALLOW_ALL",
    }
}

/// Forward on busy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardBusy {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Forward when not answered.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardNoAnswer {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub number_of_rings: Option<i64>,
    pub system_max_number_of_rings: Option<i64>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Always, busy, and no-answer forwarding of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForwardingSettings {
    pub always: Option<ForwardAlways>,
    pub busy: Option<ForwardBusy>,
    pub no_answer: Option<ForwardNoAnswer>,
}

/// Forwarding when the person's devices are unreachable.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContinuity {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Call forwarding of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForwarding {
    pub call_forwarding: Option<PersonForwardingSettings>,
    pub business_continuity: Option<BusinessContinuity>,
}

/// Call waiting.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallWaiting {
    pub enabled: Option<bool>,
}

/// Do not disturb.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoNotDisturb {
    pub enabled: Option<bool>,
    pub ring_splash_enabled: Option<bool>,
}

/// Caller ID settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerId {
    /// Allowed types, read only
    pub types: Option<Vec<CallerIdSelectedType>>,
    pub selected: Option<CallerIdSelectedType>,
    pub direct_number: Option<String>,
    pub extension_number: Option<String>,
    pub location_number: Option<String>,
    pub mobile_number: Option<String>,
    pub toll_free_location_number: Option<bool>,
    pub custom_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub block_in_forward_calls_enabled: Option<bool>,
    pub external_caller_id_name_policy: Option<ExternalCallerIdNamePolicy>,
    pub custom_external_caller_id_name: Option<String>,
    pub location_external_caller_id_name: Option<String>,
}

/// Send busy calls to voicemail.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailSendBusy {
    pub enabled: Option<bool>,
    pub greeting: Option<Greeting>,
    pub greeting_uploaded: Option<bool>,
}

/// Send unanswered calls to voicemail.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailSendUnanswered {
    pub enabled: Option<bool>,
    pub greeting: Option<Greeting>,
    pub greeting_uploaded: Option<bool>,
    pub number_of_rings: Option<i64>,
    pub system_max_number_of_rings: Option<i64>,
}

/// Flag-only voicemail option.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailEnabled {
    pub enabled: Option<bool>,
}

/// Voicemail settings of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailSettings {
    pub enabled: Option<bool>,
    pub send_all_calls: Option<VoicemailEnabled>,
    pub send_busy_calls: Option<VoicemailSendBusy>,
    pub send_unanswered_calls: Option<VoicemailSendUnanswered>,
    pub notifications: Option<VoicemailNotifications>,
    pub transfer_to_number: Option<TransferToNumber>,
    pub email_copy_of_message: Option<EmailCopyOfMessage>,
    pub message_storage: Option<MessageStorage>,
    pub fax_message: Option<FaxMessage>,
}

/// Permission for one outgoing call class.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingPermission {
    pub call_type: Option<OutgoingCallType>,
    pub action: Option<OutgoingAction>,
    pub transfer_enabled: Option<bool>,
}

/// Outgoing calling permissions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingPermissions {
    pub use_custom_enabled: Option<bool>,
    pub use_custom_permissions: Option<bool>,
    pub calling_permissions: Option<Vec<CallingPermission>>,
}

impl OutgoingPermissions {
    /// Permission configured for `call_type`, if listed.
    pub fn permission_for(&self, call_type: &OutgoingCallType) -> Option<&CallingPermission> {
        self.calling_permissions
            .as_ref()
            .and_then(|list| list.iter().find(|p| p.call_type.as_ref() == Some(call_type)))
    }
}

/// Barge-in.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BargeIn {
    pub enabled: Option<bool>,
    pub tone_enabled: Option<bool>,
}

/// Recording notification.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingNotification {
    #[serde(rename = "type")]
    pub notification_type: Option<RecordingNotificationType>,
    pub enabled: Option<bool>,
}

/// Periodic recording reminder tone.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingRepeat {
    pub interval: Option<i64>,
    pub enabled: Option<bool>,
}

/// Call recording of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecording {
    pub enabled: Option<bool>,
    pub record: Option<RecordingMode>,
    pub record_voicemail_enabled: Option<bool>,
    pub start_stop_announcement_enabled: Option<bool>,
    pub notification: Option<RecordingNotification>,
    pub repeat: Option<RecordingRepeat>,
    pub service_provider: Option<String>,
    pub external_group: Option<String>,
    pub external_identifier: Option<String>,
}

/// Privacy settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    pub aa_extension_dialing_enabled: Option<bool>,
    pub aa_naming_dialing_enabled: Option<bool>,
    pub enable_phone_status_directory_privacy: Option<bool>,
    pub enable_phone_status_pickup_barge_in_privacy: Option<bool>,
    /// IDs of people allowed to monitor despite privacy
    pub monitoring_agents: Option<Vec<String>>,
}

/// Hoteling host.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hoteling {
    pub enabled: Option<bool>,
}

/// Intercept announcement for incoming calls.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterceptIncoming {
    #[serde(rename = "type")]
    pub intercept_type: Option<InterceptType>,
    pub voicemail_enabled: Option<bool>,
}

/// Intercept handling of outgoing calls.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterceptOutgoing {
    #[serde(rename = "type")]
    pub intercept_type: Option<InterceptType>,
    pub transfer_enabled: Option<bool>,
    pub destination: Option<String>,
}

/// Call intercept.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intercept {
    pub enabled: Option<bool>,
    pub incoming: Option<InterceptIncoming>,
    pub outgoing: Option<InterceptOutgoing>,
}

/// Number assigned to a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNumber {
    pub primary: Option<bool>,
    pub direct_number: Option<String>,
    pub extension: Option<String>,
    pub routing_prefix: Option<String>,
    pub esn: Option<String>,
    pub ring_pattern: Option<RingPattern>,
}

/// Numbers of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNumbers {
    pub distinctive_ring_enabled: Option<bool>,
    pub phone_numbers: Option<Vec<PersonNumber>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_mode_with_spaces() {
        let recording: CallRecording = serde_json::from_value(json!({
            "enabled": true,
            "record": "Always with Pause/Resume",
            "notification": {"type": "Play Announcement", "enabled": true}
        }))
        .unwrap();

        assert_eq!(recording.record, Some(RecordingMode::AlwaysWithPause));
        assert_eq!(
            recording.notification.unwrap().notification_type,
            Some(RecordingNotificationType::PlayAnnouncement)
        );
    }

    #[test]
    fn test_permission_lookup() {
        let permissions: OutgoingPermissions = serde_json::from_value(json!({
            "useCustomEnabled": true,
            "callingPermissions": [
                {"callType": "INTERNATIONAL", "action": "BLOCK", "transferEnabled": false},
                {"callType": "TOLL_FREE", "action": "ALLOW", "transferEnabled": true}
            ]
        }))
        .unwrap();

        let international = permissions.permission_for(&OutgoingCallType::International).unwrap();
        assert_eq!(international.action, Some(OutgoingAction::Block));
        assert!(permissions.permission_for(&OutgoingCallType::Local).is_none());
    }

    #[test]
    fn test_forwarding_update_only_busy() {
        let update = PersonForwarding {
            call_forwarding: Some(PersonForwardingSettings {
                busy: Some(ForwardBusy {
                    enabled: Some(true),
                    destination: Some("+14085551234".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"callForwarding": {"busy": {"enabled": true, "destination": "+14085551234"}}})
        );
    }

    #[test]
    fn test_forwarding_round_trip() {
        let forwarding = PersonForwarding {
            call_forwarding: Some(PersonForwardingSettings {
                always: Some(ForwardAlways {
                    enabled: Some(false),
                    ring_reminder_enabled: Some(true),
                    ..Default::default()
                }),
                no_answer: Some(ForwardNoAnswer {
                    enabled: Some(true),
                    destination: Some("+14085551234".to_string()),
                    number_of_rings: Some(3),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            business_continuity: Some(BusinessContinuity {
                enabled: Some(true),
                destination_voicemail_enabled: Some(false),
                ..Default::default()
            }),
        };

        let value = serde_json::to_value(&forwarding).unwrap();
        assert_eq!(value["callForwarding"]["noAnswer"]["numberOfRings"], json!(3));
        assert_eq!(serde_json::from_value::<PersonForwarding>(value).unwrap(), forwarding);
    }
}
