//! Detailed call history records (`cdr_feed` on the analytics host).
//!
//! The feed uses human readable keys with spaces, so every field carries an
//! explicit rename instead of the camelCase rule used elsewhere. Numeric and
//! boolean columns are sometimes delivered as strings and accept both forms.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DisplayFromStr, PickFirst};

/// One call leg from the detailed call history feed.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDetailRecord {
    #[serde(rename = "Start time")]
    pub start_time: Option<String>,
    #[serde(rename = "Answer time")]
    pub answer_time: Option<String>,
    #[serde(rename = "Release time")]
    pub release_time: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Duration")]
    pub duration: Option<i64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "Answered")]
    pub answered: Option<bool>,
    #[serde(rename = "Direction")]
    pub direction: Option<String>,
    #[serde(rename = "Call type")]
    pub call_type: Option<String>,
    #[serde(rename = "Calling number")]
    pub calling_number: Option<String>,
    #[serde(rename = "Calling line ID")]
    pub calling_line_id: Option<String>,
    #[serde(rename = "Called number")]
    pub called_number: Option<String>,
    #[serde(rename = "Called line ID")]
    pub called_line_id: Option<String>,
    #[serde(rename = "Dialed digits")]
    pub dialed_digits: Option<String>,
    #[serde(rename = "User")]
    pub user: Option<String>,
    #[serde(rename = "User type")]
    pub user_type: Option<String>,
    #[serde(rename = "User UUID")]
    pub user_uuid: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Site UUID")]
    pub site_uuid: Option<String>,
    #[serde(rename = "Department ID")]
    pub department_id: Option<String>,
    #[serde(rename = "Device MAC")]
    pub device_mac: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Client type")]
    pub client_type: Option<String>,
    #[serde(rename = "Client version")]
    pub client_version: Option<String>,
    #[serde(rename = "OS type")]
    pub os_type: Option<String>,
    #[serde(rename = "Correlation ID")]
    pub correlation_id: Option<String>,
    #[serde(rename = "Local call ID")]
    pub local_call_id: Option<String>,
    #[serde(rename = "Remote call ID")]
    pub remote_call_id: Option<String>,
    #[serde(rename = "Final local SessionID")]
    pub final_local_session_id: Option<String>,
    #[serde(rename = "Final remote SessionID")]
    pub final_remote_session_id: Option<String>,
    #[serde(rename = "Inbound trunk")]
    pub inbound_trunk: Option<String>,
    #[serde(rename = "Outbound trunk")]
    pub outbound_trunk: Option<String>,
    #[serde(rename = "Route group")]
    pub route_group: Option<String>,
    #[serde(rename = "Redirect reason")]
    pub redirect_reason: Option<String>,
    #[serde(rename = "Original reason")]
    pub original_reason: Option<String>,
    #[serde(rename = "Related reason")]
    pub related_reason: Option<String>,
    #[serde(rename = "Releasing party")]
    pub releasing_party: Option<String>,
    #[serde(rename = "Transfer related call ID")]
    pub transfer_related_call_id: Option<String>,
    #[serde(rename = "Org UUID")]
    pub org_uuid: Option<String>,
    #[serde(rename = "Report ID")]
    pub report_id: Option<String>,
    #[serde(rename = "Report time")]
    pub report_time: Option<String>,
    #[serde(rename = "PSTN vendor name")]
    pub pstn_vendor_name: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_with_spaces() {
        let record: CallDetailRecord = serde_json::from_value(json!({
            "Start time": "2026-03-01T10:00:00.000Z",
            "Duration": 42,
            "Answered": true,
            "Calling number": "+14085550100",
            "Some new column": "ignored"
        }))
        .unwrap();

        assert_eq!(record.duration, Some(42));
        assert_eq!(record.calling_number.as_deref(), Some("+14085550100"));
        assert_eq!(serde_json::to_value(&record).unwrap()["Start time"], json!("2026-03-01T10:00:00.000Z"));
    }

    #[test]
    fn test_string_cells_are_coerced() {
        let record: CallDetailRecord = serde_json::from_value(json!({
            "Answered": "true",
            "Duration": "36"
        }))
        .unwrap();

        assert_eq!(record.answered, Some(true));
        assert_eq!(record.duration, Some(36));
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"Answered": true, "Duration": 36}));
    }

    #[test]
    fn test_missing_coerced_cells_stay_unset() {
        let record: CallDetailRecord = serde_json::from_value(json!({"Direction": "ORIGINATING"})).unwrap();

        assert_eq!(record.answered, None);
        assert_eq!(record.duration, None);
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"Direction": "ORIGINATING"}));
    }

    #[test]
    fn test_unparseable_cell_is_rejected() {
        assert!(serde_json::from_value::<CallDetailRecord>(json!({"Duration": "long"})).is_err());
    }
}
