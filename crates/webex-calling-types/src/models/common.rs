//! Records and vocabularies shared by several resource groups.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Reference to another object by ID and display name.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdAndName {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Response body of create operations that only return the new ID.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdOnly {
    pub id: Option<String>,
}

/// Error body returned by the Webex API on non-2xx responses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Top-level human readable message
    pub message: Option<String>,
    /// Individual error entries
    pub errors: Option<Vec<ErrorItem>>,
    /// Tracking ID to quote when contacting support
    pub tracking_id: Option<String>,
}

impl ErrorDetail {
    /// Best available description: the first error entry, then the message.
    pub fn description(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.iter().find_map(|e| e.description.as_deref()))
            .or(self.message.as_deref())
    }
}

/// Single entry of [`ErrorDetail::errors`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorItem {
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

string_enum! {
    /// Ring pattern played for a call.
    pub enum RingPattern {
        Normal => "NORMAL",
        LongLong => "LONG_LONG",
        ShortShortLong => "SHORT_SHORT_LONG",
        ShortLongShort => "SHORT_LONG_SHORT",
    }
}

string_enum! {
    /// Default or custom greeting.
    pub enum Greeting {
        Default => "DEFAULT",
        Custom => "CUSTOM",
    }
}

string_enum! {
    /// Announcement file media type.
    pub enum MediaFileType {
        Wav => "WAV",
        Wma => "WMA",
        ThreeGp => "3GP",
    }
}

string_enum! {
    /// Level at which an announcement file is stored.
    pub enum AnnouncementLevel {
        Organization => "ORGANIZATION",
        Location => "LOCATION",
        Entity => "ENTITY",
    }
}

string_enum! {
    /// Overall outcome of a validate action.
    pub enum ValidationStatus {
        Ok => "OK",
        Errors => "ERRORS",
    }
}

string_enum! {
    /// Kind of member in a feature's agent or target list.
    pub enum UserType {
        People => "PEOPLE",
        Place => "PLACE",
        VirtualLine => "VIRTUAL_LINE",
    }
}

string_enum! {
    /// Scope of extension and name dialing.
    pub enum DialingScope {
        Enterprise => "ENTERPRISE",
        Group => "GROUP",
    }
}

/// Alternate number with its own ring pattern.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateNumber {
    pub phone_number: Option<String>,
    pub ring_pattern: Option<RingPattern>,
    pub toll_free_number: Option<bool>,
}

/// Alternate numbers assigned to a feature.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateNumberSettings {
    pub distinctive_ring_enabled: Option<bool>,
    pub alternate_numbers: Option<Vec<AlternateNumber>>,
}

/// Audio file reference used by greetings and announcements.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFile {
    pub id: Option<String>,
    pub file_name: Option<String>,
    pub media_file_type: Option<MediaFileType>,
    pub level: Option<AnnouncementLevel>,
}

/// Person, workspace, or virtual line that is a member of a feature.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPlaceAgent {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub agent_type: Option<UserType>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub esn: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_detail_prefers_first_description() {
        let detail: ErrorDetail = serde_json::from_value(json!({
            "message": "Bad request",
            "errors": [{"description": "Location name already exists"}],
            "trackingId": "ROUTER_1234"
        }))
        .unwrap();

        assert_eq!(detail.description(), Some("Location name already exists"));
        assert_eq!(detail.tracking_id.as_deref(), Some("ROUTER_1234"));
    }

    #[test]
    fn test_error_detail_falls_back_to_message() {
        let detail = ErrorDetail { message: Some("Not found".to_string()), ..Default::default() };
        assert_eq!(detail.description(), Some("Not found"));
    }

    #[test]
    fn test_agent_type_uses_type_key() {
        let agent = PersonPlaceAgent {
            id: Some("p1".to_string()),
            agent_type: Some(UserType::Place),
            ..Default::default()
        };
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value, json!({"id": "p1", "type": "PLACE"}));
    }
}
