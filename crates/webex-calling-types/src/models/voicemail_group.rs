//! Voicemail group models (`telephony/config/voicemailGroups`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::Greeting;

string_enum! {
    /// Where voice messages are kept.
    pub enum StorageType {
        Internal => "INTERNAL",
        External => "EXTERNAL",
    }
}

/// Voicemail group summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
    pub extension: Option<String>,
    pub phone_number: Option<String>,
    pub enabled: Option<bool>,
    pub toll_free_number: Option<bool>,
}

/// Message storage settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStorage {
    pub storage_type: Option<StorageType>,
    pub external_email: Option<String>,
}

/// New-message notification target.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailNotifications {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
}

/// Fax reception.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaxMessage {
    pub enabled: Option<bool>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
}

/// Zero-out transfer destination.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferToNumber {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
}

/// Email copy of each message.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCopyOfMessage {
    pub enabled: Option<bool>,
    pub email_id: Option<String>,
}

/// Full configuration of a voicemail group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicemailGroupDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: Option<bool>,
    pub language_code: Option<String>,
    pub greeting: Option<Greeting>,
    pub greeting_uploaded: Option<bool>,
    pub greeting_description: Option<String>,
    /// Passcode, write only
    pub passcode: Option<String>,
    pub message_storage: Option<MessageStorage>,
    pub notifications: Option<VoicemailNotifications>,
    pub fax_message: Option<FaxMessage>,
    pub transfer_to_number: Option<TransferToNumber>,
    pub email_copy_of_message: Option<EmailCopyOfMessage>,
}
