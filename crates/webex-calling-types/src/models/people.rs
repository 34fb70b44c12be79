//! People and license models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// Kind of identity.
    pub enum PersonType {
        Person => "person",
        Bot => "bot",
        AppUser => "appuser",
    }
}

string_enum! {
    /// Presence status of a person.
    pub enum PersonStatus {
        Active => "active",
        Call => "call",
        DoNotDisturb => "DoNotDisturb",
        Inactive => "inactive",
        Meeting => "meeting",
        OutOfOffice => "OutOfOffice",
        Pending => "pending",
        Presenting => "presenting",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Kind of phone number attached to a person.
    pub enum PhoneNumberType {
        Work => "work",
        WorkExtension => "work_extension",
        Mobile => "mobile",
        Fax => "fax",
    }
}

/// Phone number of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    #[serde(rename = "type")]
    pub number_type: Option<PhoneNumberType>,
    pub value: Option<String>,
    pub primary: Option<bool>,
}

/// SIP address of a person.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipAddress {
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    pub value: Option<String>,
    pub primary: Option<bool>,
}

/// Webex user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Option<String>,
    pub emails: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// Webex Calling extension, only present with `callingData=true`
    pub extension: Option<String>,
    pub location_id: Option<String>,
    pub display_name: Option<String>,
    pub nick_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub org_id: Option<String>,
    pub roles: Option<Vec<String>>,
    pub licenses: Option<Vec<String>>,
    pub department: Option<String>,
    pub manager: Option<String>,
    pub manager_id: Option<String>,
    pub title: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    pub timezone: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
    pub site_urls: Option<Vec<String>>,
    pub sip_addresses: Option<Vec<SipAddress>>,
    pub status: Option<PersonStatus>,
    pub invite_pending: Option<bool>,
    pub login_enabled: Option<bool>,
    #[serde(rename = "type")]
    pub person_type: Option<PersonType>,
}

impl Person {
    /// First email address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.as_ref().and_then(|emails| emails.first()).map(String::as_str)
    }
}

/// Webex license.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    pub total_units: Option<i64>,
    pub consumed_units: Option<i64>,
    pub consumed_by_users: Option<i64>,
    pub consumed_by_workspaces: Option<i64>,
    pub subscription_id: Option<String>,
    pub site_url: Option<String>,
    pub site_type: Option<SiteType>,
}

impl License {
    /// Whether this is a Webex Calling professional license.
    pub fn is_webex_calling_professional(&self) -> bool {
        self.name.as_deref() == Some("Webex Calling - Professional")
    }
}

string_enum! {
    /// Webex site type attached to a meeting license.
    pub enum SiteType {
        ControlHub => "Control Hub managed site",
        Linked => "Linked site",
        SiteAdmin => "Site Admin managed site",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_parses_type_and_status() {
        let person: Person = serde_json::from_value(json!({
            "id": "p1",
            "emails": ["alice@example.com"],
            "phoneNumbers": [{"type": "work_extension", "value": "4001"}],
            "displayName": "Alice",
            "status": "OutOfOffice",
            "type": "person",
            "created": "2015-10-18T14:26:16.000Z"
        }))
        .unwrap();

        assert_eq!(person.primary_email(), Some("alice@example.com"));
        assert_eq!(person.person_type, Some(PersonType::Person));
        assert_eq!(person.status, Some(PersonStatus::OutOfOffice));
        let numbers = person.phone_numbers.unwrap();
        assert_eq!(numbers[0].number_type, Some(PhoneNumberType::WorkExtension));
    }

    #[test]
    fn test_license_site_type_with_spaces() {
        let license: License = serde_json::from_value(json!({
            "name": "Webex Calling - Professional",
            "siteType": "Control Hub managed site",
            "totalUnits": 50
        }))
        .unwrap();

        assert!(license.is_webex_calling_professional());
        assert_eq!(license.site_type, Some(SiteType::ControlHub));
    }
}
