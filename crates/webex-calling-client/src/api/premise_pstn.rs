//! Premises-based PSTN (`telephony/config/premisePstn`): dial plans, trunks,
//! route groups and route lists.

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{
    DialPatternEdit, DialPlan, DialPlanDetails, RouteGroup, RouteGroupDetails, RouteList,
    RouteListDetails, RouteListNumberEdit, RouteListNumberStatus, Trunk, TrunkDetails, TrunkType,
    TrunkTypes, ValidateDialPatternsResponse,
};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`PremisePstnApi::list_dial_plans`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPlanListParams {
    pub dial_plan_name: Option<String>,
    pub route_group_name: Option<String>,
    pub trunk_name: Option<String>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

/// Filters of [`PremisePstnApi::list_trunks`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkListParams {
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub trunk_type: Option<TrunkType>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

/// Filters of [`PremisePstnApi::list_route_groups`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGroupListParams {
    pub name: Option<String>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

/// Filters of [`PremisePstnApi::list_route_lists`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteListListParams {
    pub name: Option<String>,
    /// Comma separated location IDs
    pub location_id: Option<String>,
    pub order: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DialPatternsBody<'a> {
    #[serde(skip_serializing_if = "<[DialPatternEdit]>::is_empty")]
    dial_patterns: &'a [DialPatternEdit],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    delete_all_dial_patterns: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateDialPatternsBody<'a> {
    dial_patterns: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteListNumbersBody<'a> {
    #[serde(skip_serializing_if = "<[RouteListNumberEdit]>::is_empty")]
    numbers: &'a [RouteListNumberEdit],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    delete_all_numbers: bool,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteListNumbersResponse {
    number_status: Option<Vec<RouteListNumberStatus>>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrunkTypesResponse {
    trunk_types: Option<Vec<TrunkTypes>>,
}

pub struct PremisePstnApi {
    child: ApiChild,
}

impl PremisePstnApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "telephony/config/premisePstn") }
    }

    fn url(&self, path: &str) -> String {
        self.child.ep(Some(path))
    }

    // Dial plans

    pub fn list_dial_plans(&self, params: &DialPlanListParams) -> ItemStream<DialPlan> {
        self.child.paginate_filtered(self.url("dialPlans"), params, "dialPlans")
    }

    /// Create a dial plan with its initial dial patterns; returns the new ID.
    pub async fn create_dial_plan(&self, dial_plan: &DialPlanDetails, org_id: Option<&str>) -> Result<String> {
        self.child.post_for_id(&self.url("dialPlans"), &QueryParams::org_id(org_id), dial_plan).await
    }

    pub async fn dial_plan_details(&self, dial_plan_id: &str, org_id: Option<&str>) -> Result<DialPlanDetails> {
        let url = self.url(&format!("dialPlans/{dial_plan_id}"));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_dial_plan(
        &self,
        dial_plan_id: &str,
        dial_plan: &DialPlanDetails,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&format!("dialPlans/{dial_plan_id}"));
        let body = DialPlanDetails {
            name: dial_plan.name.clone(),
            route_id: dial_plan.route_id.clone(),
            route_type: dial_plan.route_type.clone(),
            ..Default::default()
        };
        self.child.put_empty(&url, &QueryParams::org_id(org_id), &body).await
    }

    pub async fn delete_dial_plan(&self, dial_plan_id: &str, org_id: Option<&str>) -> Result<()> {
        let url = self.url(&format!("dialPlans/{dial_plan_id}"));
        self.child.delete(&url, &QueryParams::org_id(org_id)).await
    }

    /// Dial patterns of a dial plan; items are the pattern strings.
    pub fn list_dial_patterns(
        &self,
        dial_plan_id: &str,
        dial_pattern: Option<&str>,
        org_id: Option<&str>,
    ) -> ItemStream<String> {
        let params = QueryParams::new().with_opt("dialPattern", dial_pattern).with_opt("orgId", org_id);
        self.child
            .paginate(self.url(&format!("dialPlans/{dial_plan_id}/dialPatterns")), params, "dialPatterns")
    }

    /// Add or delete dial patterns. With `delete_all` every existing pattern is removed first.
    pub async fn modify_dial_patterns(
        &self,
        dial_plan_id: &str,
        dial_patterns: &[DialPatternEdit],
        delete_all: bool,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&format!("dialPlans/{dial_plan_id}/dialPatterns"));
        let body = DialPatternsBody { dial_patterns, delete_all_dial_patterns: delete_all };
        self.child.put_empty(&url, &QueryParams::org_id(org_id), &body).await
    }

    pub async fn validate_dial_patterns(
        &self,
        dial_patterns: &[String],
        org_id: Option<&str>,
    ) -> Result<ValidateDialPatternsResponse> {
        let body = ValidateDialPatternsBody { dial_patterns };
        self.child
            .post(&self.url("actions/validateDialPatterns/invoke"), &QueryParams::org_id(org_id), &body)
            .await
    }

    // Trunks

    pub fn list_trunks(&self, params: &TrunkListParams) -> ItemStream<Trunk> {
        self.child.paginate_filtered(self.url("trunks"), params, "trunks")
    }

    pub async fn create_trunk(&self, trunk: &TrunkDetails, org_id: Option<&str>) -> Result<String> {
        self.child.post_for_id(&self.url("trunks"), &QueryParams::org_id(org_id), trunk).await
    }

    pub async fn trunk_details(&self, trunk_id: &str, org_id: Option<&str>) -> Result<TrunkDetails> {
        self.child.get(&self.url(&format!("trunks/{trunk_id}")), &QueryParams::org_id(org_id)).await
    }

    pub async fn update_trunk(&self, trunk_id: &str, trunk: &TrunkDetails, org_id: Option<&str>) -> Result<()> {
        let body = TrunkDetails {
            name: trunk.name.clone(),
            password: trunk.password.clone(),
            dual_identity_support_enabled: trunk.dual_identity_support_enabled,
            max_concurrent_calls: trunk.max_concurrent_calls,
            ..Default::default()
        };
        self.child
            .put_empty(&self.url(&format!("trunks/{trunk_id}")), &QueryParams::org_id(org_id), &body)
            .await
    }

    pub async fn delete_trunk(&self, trunk_id: &str, org_id: Option<&str>) -> Result<()> {
        self.child.delete(&self.url(&format!("trunks/{trunk_id}")), &QueryParams::org_id(org_id)).await
    }

    /// Trunk types and the device types allowed for each.
    pub async fn trunk_types(&self, org_id: Option<&str>) -> Result<Vec<TrunkTypes>> {
        let resp: TrunkTypesResponse =
            self.child.get(&self.url("trunks/trunkTypes"), &QueryParams::org_id(org_id)).await?;
        Ok(resp.trunk_types.unwrap_or_default())
    }

    // Route groups

    pub fn list_route_groups(&self, params: &RouteGroupListParams) -> ItemStream<RouteGroup> {
        self.child.paginate_filtered(self.url("routeGroups"), params, "routeGroups")
    }

    pub async fn create_route_group(&self, route_group: &RouteGroupDetails, org_id: Option<&str>) -> Result<String> {
        self.child.post_for_id(&self.url("routeGroups"), &QueryParams::org_id(org_id), route_group).await
    }

    pub async fn route_group_details(&self, route_group_id: &str, org_id: Option<&str>) -> Result<RouteGroupDetails> {
        let url = self.url(&format!("routeGroups/{route_group_id}"));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_route_group(
        &self,
        route_group_id: &str,
        route_group: &RouteGroupDetails,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&format!("routeGroups/{route_group_id}"));
        let body = RouteGroupDetails { id: None, organization: None, ..route_group.clone() };
        self.child.put_empty(&url, &QueryParams::org_id(org_id), &body).await
    }

    pub async fn delete_route_group(&self, route_group_id: &str, org_id: Option<&str>) -> Result<()> {
        let url = self.url(&format!("routeGroups/{route_group_id}"));
        self.child.delete(&url, &QueryParams::org_id(org_id)).await
    }

    // Route lists

    pub fn list_route_lists(&self, params: &RouteListListParams) -> ItemStream<RouteList> {
        self.child.paginate_filtered(self.url("routeLists"), params, "routeLists")
    }

    pub async fn create_route_list(&self, route_list: &RouteListDetails, org_id: Option<&str>) -> Result<String> {
        let body = RouteListDetails {
            name: route_list.name.clone(),
            location_id: route_list.location_id.clone(),
            route_group_id: route_list.route_group_id.clone(),
            ..Default::default()
        };
        self.child.post_for_id(&self.url("routeLists"), &QueryParams::org_id(org_id), &body).await
    }

    pub async fn route_list_details(&self, route_list_id: &str, org_id: Option<&str>) -> Result<RouteListDetails> {
        let url = self.url(&format!("routeLists/{route_list_id}"));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub async fn update_route_list(
        &self,
        route_list_id: &str,
        name: Option<&str>,
        route_group_id: Option<&str>,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(&format!("routeLists/{route_list_id}"));
        let body = RouteListDetails {
            name: name.map(str::to_string),
            route_group_id: route_group_id.map(str::to_string),
            ..Default::default()
        };
        self.child.put_empty(&url, &QueryParams::org_id(org_id), &body).await
    }

    pub async fn delete_route_list(&self, route_list_id: &str, org_id: Option<&str>) -> Result<()> {
        let url = self.url(&format!("routeLists/{route_list_id}"));
        self.child.delete(&url, &QueryParams::org_id(org_id)).await
    }

    /// Add or remove numbers; returns the per-number status reported by the server.
    pub async fn modify_route_list_numbers(
        &self,
        route_list_id: &str,
        numbers: &[RouteListNumberEdit],
        delete_all: bool,
        org_id: Option<&str>,
    ) -> Result<Vec<RouteListNumberStatus>> {
        let url = self.url(&format!("routeLists/{route_list_id}/numbers"));
        let body = RouteListNumbersBody { numbers, delete_all_numbers: delete_all };
        let body = serde_json::to_value(&body)?;
        let resp = self.child.session().rest_put(&url, &QueryParams::org_id(org_id), Some(&body)).await?;
        let Some(resp) = resp else {
            return Ok(Vec::new());
        };
        let resp: RouteListNumbersResponse = serde_json::from_value(resp)?;
        Ok(resp.number_status.unwrap_or_default())
    }

    /// Numbers assigned to a route list; items are the phone number strings.
    pub fn list_route_list_numbers(
        &self,
        route_list_id: &str,
        order: Option<&str>,
        number: Option<&str>,
        org_id: Option<&str>,
    ) -> ItemStream<String> {
        let params = QueryParams::new()
            .with_opt("order", order)
            .with_opt("number", number)
            .with_opt("orgId", org_id);
        self.child.paginate(self.url(&format!("routeLists/{route_list_id}/numbers")), params, "phoneNumbers")
    }
}
