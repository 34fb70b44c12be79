//! Hunt group models (`telephony/config/huntGroups`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::call_queue::{Agent, HuntPolicy};
use super::common::AlternateNumber;

/// Hunt group summary as returned by list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub enabled: Option<bool>,
}

/// No-answer handling of a hunt group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoAnswer {
    pub next_agent_enabled: Option<bool>,
    pub next_agent_rings: Option<i64>,
    pub forward_enabled: Option<bool>,
    pub number_of_rings: Option<i64>,
    pub system_max_number_of_rings: Option<i64>,
    pub destination: Option<String>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Redirect target used for busy and business continuity.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectSetting {
    pub enabled: Option<bool>,
    pub destination: Option<String>,
    pub destination_voicemail_enabled: Option<bool>,
}

/// Call policies of a hunt group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntGroupPolicy {
    pub policy: Option<HuntPolicy>,
    pub waiting_enabled: Option<bool>,
    pub group_busy_enabled: Option<bool>,
    pub allow_members_to_control_group_busy_enabled: Option<bool>,
    pub no_answer: Option<NoAnswer>,
    pub busy_redirect: Option<RedirectSetting>,
    pub business_continuity_redirect: Option<RedirectSetting>,
}

/// Full configuration of a hunt group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntGroupDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub phone_number: Option<String>,
    pub extension: Option<String>,
    pub distinctive_ring: Option<bool>,
    pub alternate_numbers: Option<Vec<AlternateNumber>>,
    pub language: Option<String>,
    pub language_code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time_zone: Option<String>,
    pub call_policies: Option<HuntGroupPolicy>,
    pub agents: Option<Vec<Agent>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hunt_group_policy_redirects() {
        let details: HuntGroupDetails = serde_json::from_value(json!({
            "name": "Sales",
            "callPolicies": {
                "policy": "SIMULTANEOUS",
                "noAnswer": {"nextAgentEnabled": true, "nextAgentRings": 3},
                "businessContinuityRedirect": {"enabled": true, "destination": "+12025550123"}
            }
        }))
        .unwrap();

        let policy = details.call_policies.unwrap();
        assert_eq!(policy.policy, Some(HuntPolicy::Simultaneous));
        assert_eq!(policy.no_answer.unwrap().next_agent_rings, Some(3));
        assert!(policy.busy_redirect.is_none());
        assert_eq!(
            policy.business_continuity_redirect.unwrap().destination.as_deref(),
            Some("+12025550123")
        );
    }
}
