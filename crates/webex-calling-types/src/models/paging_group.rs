//! Paging group models (`telephony/config/paging`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::UserType;

/// Paging group summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub toll_free_number: Option<bool>,
}

/// Originator or target of a paging group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingAgent {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "type")]
    pub agent_type: Option<UserType>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub esn: Option<String>,
}

/// Full configuration of a paging group.
///
/// On create and update, `originators` and `targets` are sent as ID lists by
/// the server contract; use [`PagingGroupDetails::for_update`] to build that shape.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingGroupDetails {
    pub id: Option<String>,
    pub enabled: Option<bool>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub originator_caller_id_enabled: Option<bool>,
    pub originators: Option<Vec<PagingAgent>>,
    pub targets: Option<Vec<PagingAgent>>,
}

/// Create/update body of a paging group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingGroupUpdate {
    pub enabled: Option<bool>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub language_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub originator_caller_id_enabled: Option<bool>,
    pub originators: Option<Vec<String>>,
    pub targets: Option<Vec<String>>,
}

impl PagingGroupDetails {
    /// Convert a details object into the body accepted by create and update.
    pub fn for_update(&self) -> PagingGroupUpdate {
        let ids = |agents: &Option<Vec<PagingAgent>>| {
            agents.as_ref().map(|list| list.iter().filter_map(|a| a.id.clone()).collect())
        };
        PagingGroupUpdate {
            enabled: self.enabled,
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            extension: self.extension.clone(),
            language_code: self.language_code.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            originator_caller_id_enabled: self.originator_caller_id_enabled,
            originators: ids(&self.originators),
            targets: ids(&self.targets),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_update_flattens_agents_to_ids() {
        let details: PagingGroupDetails = serde_json::from_value(json!({
            "id": "pg1",
            "name": "Warehouse",
            "originators": [{"id": "p1", "type": "PEOPLE"}],
            "targets": [{"id": "w1", "type": "PLACE"}, {"firstName": "no id"}]
        }))
        .unwrap();

        let update = details.for_update();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"name": "Warehouse", "originators": ["p1"], "targets": ["w1"]})
        );
    }
}
