//! Locations (`locations`).

use std::sync::Arc;

use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::{Address, Location};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters of [`LocationsApi::list`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationListParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub org_id: Option<String>,
    /// Page size
    pub max: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLocationBody<'a> {
    name: &'a str,
    time_zone: &'a str,
    preferred_language: Option<&'a str>,
    announcement_language: Option<&'a str>,
    address: Option<&'a Address>,
}

pub struct LocationsApi {
    child: ApiChild,
}

impl LocationsApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "locations") }
    }

    pub fn list(&self, params: &LocationListParams) -> ItemStream<Location> {
        self.child.paginate_filtered(self.child.ep(None), params, "items")
    }

    pub async fn details(&self, location_id: &str, org_id: Option<&str>) -> Result<Location> {
        self.child.get(&self.child.ep(Some(location_id)), &QueryParams::org_id(org_id)).await
    }

    /// Create a location and return its ID. Only the supplied fields are sent.
    pub async fn create(
        &self,
        name: &str,
        time_zone: &str,
        preferred_language: Option<&str>,
        announcement_language: Option<&str>,
        address: Option<&Address>,
        org_id: Option<&str>,
    ) -> Result<String> {
        let body = CreateLocationBody {
            name,
            time_zone,
            preferred_language,
            announcement_language,
            address,
        };
        self.child.post_for_id(&self.child.ep(None), &QueryParams::org_id(org_id), &body).await
    }

    pub async fn update(
        &self,
        location_id: &str,
        settings: &Location,
        org_id: Option<&str>,
    ) -> Result<()> {
        let body = Location { id: None, ..settings.clone() };
        self.child
            .put_empty(&self.child.ep(Some(location_id)), &QueryParams::org_id(org_id), &body)
            .await
    }
}
