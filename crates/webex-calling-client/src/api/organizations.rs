//! Organisations (`organizations`).

use std::sync::Arc;

use webex_calling_types::Organization;

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct OrganizationsApi {
    child: ApiChild,
}

impl OrganizationsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "organizations") }
    }

    /// Organisations visible to the token. Not paginated.
    pub async fn list(&self, calling_data: Option<bool>) -> Result<Vec<Organization>> {
        let params = QueryParams::new().with_opt("callingData", calling_data);
        self.child.get_list(&self.child.ep(None), &params, "items").await
    }

    pub async fn details(&self, org_id: &str, calling_data: Option<bool>) -> Result<Organization> {
        let params = QueryParams::new().with_opt("callingData", calling_data);
        self.child.get(&self.child.ep(Some(org_id)), &params).await
    }
}
