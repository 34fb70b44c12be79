//! Phone number inventory models (`telephony/config/numbers`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::ValidationStatus;

string_enum! {
    /// Activation state of a number.
    pub enum NumberState {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// Filter for numbers, extensions, or both.
    pub enum NumberType {
        Extension => "EXTENSION",
        Number => "NUMBER",
        Both => "BOTH",
    }
}

string_enum! {
    /// Role of a phone number on its owner.
    pub enum PhoneNumberKind {
        Primary => "PRIMARY",
        Alternate => "ALTERNATE",
        Fax => "FAX",
        Dnis => "DNIS",
    }
}

string_enum! {
    /// Kind of entity a number is assigned to.
    pub enum OwnerType {
        People => "PEOPLE",
        Place => "PLACE",
        VirtualLine => "VIRTUAL_LINE",
        AutoAttendant => "AUTO_ATTENDANT",
        CallQueue => "CALL_QUEUE",
        GroupPaging => "GROUP_PAGING",
        HuntGroup => "HUNT_GROUP",
        VoiceMessaging => "VOICE_MESSAGING",
        BroadworksAnywhere => "BROADWORKS_ANYWHERE",
        ContactCenterLink => "CONTACT_CENTER_LINK",
        RouteList => "ROUTE_LIST",
        VoicemailGroup => "VOICEMAIL_GROUP",
    }
}

string_enum! {
    /// Validation state of one number.
    pub enum NumberValidationState {
        Available => "Available",
        Duplicate => "Duplicate",
        DuplicateInList => "Duplicate In List",
        Invalid => "Invalid",
        Unavailable => "Unavailable",
    }
}

/// Location a number belongs to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocation {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Entity a number is assigned to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOwner {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub owner_type: Option<OwnerType>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

/// One entry of the number inventory.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberListItem {
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub routing_prefix: Option<String>,
    pub esn: Option<String>,
    pub state: Option<NumberState>,
    pub phone_number_type: Option<PhoneNumberKind>,
    pub main_number: Option<bool>,
    pub toll_free_number: Option<bool>,
    pub is_service_number: Option<bool>,
    pub location: Option<NumberLocation>,
    pub owner: Option<NumberOwner>,
}

/// Body of add, activate, and remove numbers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersBody {
    pub phone_numbers: Vec<String>,
    pub number_type: Option<NumberType>,
    pub state: Option<NumberState>,
}

/// Validation result for one number.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberValidation {
    pub phone_number: Option<String>,
    pub state: Option<NumberValidationState>,
    pub toll_free_number: Option<bool>,
    pub detail: Option<Vec<String>>,
}

/// Response of validate numbers.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateNumbersResponse {
    pub status: Option<ValidationStatus>,
    pub phone_numbers: Option<Vec<NumberValidation>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_list_item_parses_owner() {
        let item: NumberListItem = serde_json::from_value(json!({
            "phoneNumber": "+12055550101",
            "extension": "101",
            "state": "ACTIVE",
            "phoneNumberType": "PRIMARY",
            "mainNumber": false,
            "tollFreeNumber": false,
            "location": {"id": "loc1", "name": "Denver"},
            "owner": {"id": "p1", "type": "PEOPLE", "firstName": "Ann", "lastName": "Lee"}
        }))
        .unwrap();

        assert_eq!(item.state, Some(NumberState::Active));
        let owner = item.owner.unwrap();
        assert_eq!(owner.owner_type, Some(OwnerType::People));
        assert_eq!(item.location.unwrap().name.as_deref(), Some("Denver"));
    }

    #[test]
    fn test_numbers_body_always_has_list() {
        let body = NumbersBody { phone_numbers: vec!["+12055550101".to_string()], ..Default::default() };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"phoneNumbers": ["+12055550101"]}));
    }
}
