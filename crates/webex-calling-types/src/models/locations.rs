//! Location models (`locations`, `telephony/config/locations`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ValidationStatus;

/// Postal address of a location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Webex location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Option<String>,
    pub name: Option<String>,
    pub org_id: Option<String>,
    /// IANA time zone, e.g. `America/New_York`
    pub time_zone: Option<String>,
    pub preferred_language: Option<String>,
    pub announcement_language: Option<String>,
    pub address: Option<Address>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
}

string_enum! {
    /// How a location reaches the PSTN.
    pub enum PstnConnectionType {
        Trunk => "TRUNK",
        RouteGroup => "ROUTE_GROUP",
    }
}

/// Calling line ID presented for outbound calls.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingLineId {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// PSTN connection of a calling location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PstnConnection {
    #[serde(rename = "type")]
    pub connection_type: Option<PstnConnectionType>,
    pub id: Option<String>,
}

/// Calling settings of a location enabled for Webex Calling.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCallingDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub announcement_language: Option<String>,
    pub calling_line_id: Option<CallingLineId>,
    pub connection: Option<PstnConnection>,
    pub external_caller_id_name: Option<String>,
    pub user_limit: Option<i64>,
    pub p_access_network_info: Option<String>,
    pub outside_dial_digit: Option<String>,
    pub enforce_outside_dial_digit: Option<bool>,
    pub routing_prefix: Option<String>,
    pub default_domain: Option<String>,
    pub charge_number: Option<String>,
}

string_enum! {
    /// Destination kind for unknown extensions.
    pub enum RouteIdentityType {
        RouteGroup => "ROUTE_GROUP",
        Trunk => "TRUNK",
    }
}

/// Trunk or route group that unknown extensions route to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteIdentity {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub route_type: Option<RouteIdentityType>,
}

/// Internal dialing settings of a location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDialing {
    pub enable_unknown_extension_route_policy: Option<bool>,
    pub unknown_extension_route_identity: Option<RouteIdentity>,
}

/// Voicemail policy of a location.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationVoicemailSettings {
    pub voicemail_transcription_enabled: Option<bool>,
}

/// Body of modify announcement language.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementLanguageChange {
    pub announcement_language_code: Option<String>,
    pub agent_enabled: Option<bool>,
    pub entity_enabled: Option<bool>,
}

string_enum! {
    /// Validation state of one extension.
    pub enum ExtensionState {
        Valid => "VALID",
        Duplicate => "DUPLICATE",
        DuplicateInList => "DUPLICATE_IN_LIST",
        Invalid => "INVALID",
    }
}

/// Validation result for one extension.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionStatus {
    pub extension: Option<String>,
    pub state: Option<ExtensionState>,
    pub error_code: Option<i64>,
    pub message: Option<String>,
}

/// Response of validate extensions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateExtensionsResponse {
    pub status: Option<ValidationStatus>,
    pub extension_status: Option<Vec<ExtensionStatus>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_only_set_fields_serialize() {
        let location = Location {
            name: Some("HQ".to_string()),
            time_zone: Some("America/New_York".to_string()),
            announcement_language: Some("en_us".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "HQ",
                "timeZone": "America/New_York",
                "announcementLanguage": "en_us"
            })
        );
    }

    #[test]
    fn test_location_parse_keeps_address() {
        let location: Location = serde_json::from_value(json!({
            "id": "loc1",
            "name": "Denver",
            "orgId": "org1",
            "address": {"address1": "771 Alder Drive", "postalCode": "95035", "country": "US"},
            "latitude": 37.4,
            "longitude": -121.9
        }))
        .unwrap();

        let address = location.address.unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("95035"));
        assert_eq!(location.latitude, Some(37.4));
        assert!(location.time_zone.is_none());
    }

    #[test]
    fn test_validate_extensions_response() {
        let response: ValidateExtensionsResponse = serde_json::from_value(json!({
            "status": "ERRORS",
            "extensionStatus": [
                {"extension": "407721", "state": "DUPLICATE", "errorCode": 9495, "message": "dup"}
            ]
        }))
        .unwrap();

        assert_eq!(response.status, Some(ValidationStatus::Errors));
        let status = &response.extension_status.unwrap()[0];
        assert_eq!(status.state, Some(ExtensionState::Duplicate));
        assert_eq!(status.error_code, Some(9495));
    }

    #[test]
    fn test_location_with_address_round_trip() {
        let location = Location {
            id: Some("l1".to_string()),
            name: Some("HQ".to_string()),
            time_zone: Some("America/Chicago".to_string()),
            address: Some(Address {
                address1: Some("771 Alder Drive".to_string()),
                city: Some("Milpitas".to_string()),
                state: Some("CA".to_string()),
                postal_code: Some("95035".to_string()),
                country: Some("US".to_string()),
                ..Default::default()
            }),
            latitude: Some(37.4236),
            longitude: Some(-121.9141),
            ..Default::default()
        };

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value["address"]["postalCode"], json!("95035"));
        assert!(value["address"].get("address2").is_none());
        assert_eq!(serde_json::from_value::<Location>(value).unwrap(), location);
    }
}
