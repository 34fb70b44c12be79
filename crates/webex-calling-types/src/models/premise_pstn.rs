//! Premises-based PSTN models (`telephony/config/premisePstn`).
//!
//! Dial plans route dial patterns to a trunk or route group. Route groups
//! bundle trunks with priorities, and route lists hand numbers to a route
//! group at one location.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::{IdAndName, ValidationStatus};

string_enum! {
    /// What a dial plan or route list routes to.
    pub enum RouteType {
        RouteGroup => "ROUTE_GROUP",
        Trunk => "TRUNK",
    }
}

string_enum! {
    /// Edit applied to a dial pattern.
    pub enum DialPatternAction {
        Add => "ADD",
        Delete => "DELETE",
    }
}

string_enum! {
    /// Validation outcome of one dial pattern.
    pub enum DialPatternStatus {
        Invalid => "INVALID",
        Duplicate => "DUPLICATE",
        DuplicateInList => "DUPLICATE_IN_LIST",
    }
}

string_enum! {
    /// Trunk flavour.
    pub enum TrunkType {
        Registering => "REGISTERING",
        CertificateBased => "CERTIFICATE_BASED",
    }
}

string_enum! {
    /// Registration state of a trunk or gateway.
    pub enum DeviceStatus {
        Online => "online",
        Offline => "offline",
        Unknown => "unknown",
    }
}

/// Dial plan summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPlan {
    pub id: Option<String>,
    pub name: Option<String>,
    pub route_id: Option<String>,
    pub route_name: Option<String>,
    pub route_type: Option<RouteType>,
}

/// Dial plan with its routing target; create also carries the initial patterns.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPlanDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub route_id: Option<String>,
    pub route_name: Option<String>,
    pub route_type: Option<RouteType>,
    pub customer: Option<IdAndName>,
    pub dial_patterns: Option<Vec<String>>,
}

/// One pattern change in a modify request.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPatternEdit {
    pub dial_pattern: Option<String>,
    pub action: Option<DialPatternAction>,
}

impl DialPatternEdit {
    pub fn add(pattern: impl Into<String>) -> Self {
        Self { dial_pattern: Some(pattern.into()), action: Some(DialPatternAction::Add) }
    }

    pub fn delete(pattern: impl Into<String>) -> Self {
        Self { dial_pattern: Some(pattern.into()), action: Some(DialPatternAction::Delete) }
    }
}

/// Validation result of one pattern.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPatternValidation {
    pub dial_pattern: Option<String>,
    pub pattern_status: Option<DialPatternStatus>,
    pub message: Option<String>,
}

/// Response of `validateDialPatterns`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDialPatternsResponse {
    pub status: Option<ValidationStatus>,
    pub dial_pattern_status: Option<Vec<DialPatternValidation>>,
}

/// Trunk summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trunk {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<IdAndName>,
    pub in_use: Option<bool>,
    pub trunk_type: Option<TrunkType>,
    pub is_restricted_to_dedicated_instance: Option<bool>,
}

/// Full configuration of a trunk.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub organization: Option<IdAndName>,
    pub location: Option<IdAndName>,
    /// Location ID, only used on create
    pub location_id: Option<String>,
    pub otg_dtg_id: Option<String>,
    pub line_port: Option<String>,
    pub sip_authentication_user_name: Option<String>,
    /// Write only
    pub password: Option<String>,
    pub dual_identity_support_enabled: Option<bool>,
    pub trunk_type: Option<TrunkType>,
    pub device_type: Option<String>,
    pub address: Option<String>,
    pub domain: Option<String>,
    pub port: Option<u16>,
    pub max_concurrent_calls: Option<u32>,
    pub status: Option<DeviceStatus>,
    pub response_status: Option<Vec<String>>,
}

/// Device type usable for a trunk.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkDeviceType {
    pub device_type: Option<String>,
    pub min_concurrent_calls: Option<u32>,
    pub max_concurrent_calls: Option<u32>,
}

/// Trunk type with its device types.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkTypes {
    pub trunk_type: Option<TrunkType>,
    pub device_types: Option<Vec<TrunkDeviceType>>,
}

/// Route group summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub in_use: Option<bool>,
}

/// Trunk membership of a route group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalGateway {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_id: Option<String>,
    pub priority: Option<u32>,
}

/// Full configuration of a route group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroupDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub organization: Option<IdAndName>,
    pub local_gateways: Option<Vec<LocalGateway>>,
}

/// Route list summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteList {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_id: Option<String>,
    pub location_name: Option<String>,
    pub route_group_id: Option<String>,
    pub route_group_name: Option<String>,
}

/// Full configuration of a route list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<IdAndName>,
    /// Location ID, only used on create
    pub location_id: Option<String>,
    pub route_group: Option<IdAndName>,
    /// Route group ID, used on create and update
    pub route_group_id: Option<String>,
}

/// One number change on a route list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListNumberEdit {
    pub number: Option<String>,
    pub action: Option<DialPatternAction>,
}

/// Per-number result of a route list modification.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListNumberStatus {
    pub phone_number: Option<String>,
    pub number_status: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dial_pattern_edits() {
        let edits = vec![DialPatternEdit::add("+1408XXX"), DialPatternEdit::delete("+1919!")];
        assert_eq!(
            serde_json::to_value(&edits).unwrap(),
            json!([
                {"dialPattern": "+1408XXX", "action": "ADD"},
                {"dialPattern": "+1919!", "action": "DELETE"}
            ])
        );
    }

    #[test]
    fn test_trunk_details_status() {
        let trunk: TrunkDetails = serde_json::from_value(json!({
            "id": "t1",
            "trunkType": "REGISTERING",
            "status": "unknown",
            "location": {"id": "l1", "name": "HQ"},
            "port": 5061
        }))
        .unwrap();

        assert_eq!(trunk.trunk_type, Some(TrunkType::Registering));
        assert_eq!(trunk.status, Some(DeviceStatus::Unknown));
        assert!(!DeviceStatus::Unknown.is_unrecognized());
        assert_eq!(trunk.port, Some(5061));
    }
}
