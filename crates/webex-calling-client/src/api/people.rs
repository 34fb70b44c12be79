//! People and licenses (`people`, `licenses`).

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{License, Person};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`PeopleApi::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleListParams {
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Comma separated list of person IDs
    pub id: Option<String>,
    pub org_id: Option<String>,
    pub location_id: Option<String>,
    /// Include Webex Calling fields (extension, location, ...)
    pub calling_data: Option<bool>,
    pub max: Option<u32>,
}

pub struct PeopleApi {
    child: ApiChild,
}

impl PeopleApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "people") }
    }

    pub fn list(&self, params: &PeopleListParams) -> ItemStream<Person> {
        self.child.paginate_filtered(self.child.ep(None), params, "items")
    }

    fn calling_data(calling_data: Option<bool>) -> QueryParams {
        QueryParams::new().with_opt("callingData", calling_data)
    }

    pub async fn details(&self, person_id: &str, calling_data: Option<bool>) -> Result<Person> {
        self.child.get(&self.child.ep(Some(person_id)), &Self::calling_data(calling_data)).await
    }

    /// The authenticated user.
    pub async fn me(&self, calling_data: Option<bool>) -> Result<Person> {
        self.child.get(&self.child.ep(Some("me")), &Self::calling_data(calling_data)).await
    }

    pub async fn create(&self, settings: &Person, calling_data: Option<bool>) -> Result<Person> {
        self.child.post(&self.child.ep(None), &Self::calling_data(calling_data), settings).await
    }

    /// Replace a person. Fields left unset are cleared by the server.
    pub async fn update(
        &self,
        person_id: &str,
        settings: &Person,
        calling_data: Option<bool>,
    ) -> Result<Person> {
        self.child
            .put(&self.child.ep(Some(person_id)), &Self::calling_data(calling_data), settings)
            .await
    }

    pub async fn delete(&self, person_id: &str) -> Result<()> {
        self.child.delete(&self.child.ep(Some(person_id)), &QueryParams::new()).await
    }
}

pub struct LicensesApi {
    child: ApiChild,
}

impl LicensesApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "licenses") }
    }

    pub fn list(&self, org_id: Option<&str>) -> ItemStream<License> {
        self.child.paginate(self.child.ep(None), QueryParams::org_id(org_id), "items")
    }

    pub async fn details(&self, license_id: &str) -> Result<License> {
        self.child.get(&self.child.ep(Some(license_id)), &QueryParams::new()).await
    }
}
