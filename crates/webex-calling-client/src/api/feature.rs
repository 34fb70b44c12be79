//! Shared shape of location-scoped features (queues, hunt groups, ...).
//!
//! Every feature is listed org-wide from `telephony/config/<collection>` and
//! managed below `telephony/config/locations/{location_id}/<collection>`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_with::skip_serializing_none;
use webex_calling_types::CallForwarding;

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Filters shared by the org-wide feature lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureListParams {
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub org_id: Option<String>,
    pub max: Option<u32>,
}

pub(crate) struct LocationFeature {
    child: ApiChild,
    collection: &'static str,
    list_key: &'static str,
}

impl LocationFeature {
    pub(crate) fn new(session: Arc<RestSession>, collection: &'static str, list_key: &'static str) -> Self {
        Self { child: ApiChild::new(session, "telephony/config"), collection, list_key }
    }

    pub(crate) fn child(&self) -> &ApiChild {
        &self.child
    }

    /// `locations/{location_id}/<collection>[/{path}]`
    pub(crate) fn url(&self, location_id: &str, path: Option<&str>) -> String {
        let collection = format!("locations/{location_id}/{}", self.collection);
        match path {
            Some(path) => self.child.ep(Some(&format!("{collection}/{path}"))),
            None => self.child.ep(Some(&collection)),
        }
    }

    pub(crate) fn list<T>(&self, params: &FeatureListParams) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.child.paginate_filtered(self.child.ep(Some(self.collection)), params, self.list_key)
    }

    pub(crate) async fn create<B: Serialize>(&self, location_id: &str, body: &B, org_id: Option<&str>) -> Result<String> {
        self.child.post_for_id(&self.url(location_id, None), &QueryParams::org_id(org_id), body).await
    }

    pub(crate) async fn details<D: DeserializeOwned>(
        &self,
        location_id: &str,
        feature_id: &str,
        org_id: Option<&str>,
    ) -> Result<D> {
        self.child.get(&self.url(location_id, Some(feature_id)), &QueryParams::org_id(org_id)).await
    }

    pub(crate) async fn update<B: Serialize>(
        &self,
        location_id: &str,
        feature_id: &str,
        body: &B,
        org_id: Option<&str>,
    ) -> Result<()> {
        self.child
            .put_empty(&self.url(location_id, Some(feature_id)), &QueryParams::org_id(org_id), body)
            .await
    }

    pub(crate) async fn delete(&self, location_id: &str, feature_id: &str, org_id: Option<&str>) -> Result<()> {
        self.child.delete(&self.url(location_id, Some(feature_id)), &QueryParams::org_id(org_id)).await
    }

    pub(crate) async fn read_forwarding(
        &self,
        location_id: &str,
        feature_id: &str,
        org_id: Option<&str>,
    ) -> Result<CallForwarding> {
        let url = self.url(location_id, Some(&format!("{feature_id}/callForwarding")));
        self.child.get(&url, &QueryParams::org_id(org_id)).await
    }

    pub(crate) async fn update_forwarding(
        &self,
        location_id: &str,
        feature_id: &str,
        forwarding: &CallForwarding,
        org_id: Option<&str>,
    ) -> Result<()> {
        let url = self.url(location_id, Some(&format!("{feature_id}/callForwarding")));
        self.child.put_empty(&url, &QueryParams::org_id(org_id), forwarding).await
    }
}

/// Declare a feature client with list, create, details, update and delete.
macro_rules! location_feature_api {
    (
        $(#[$meta:meta])*
        $name:ident {
            collection: $collection:literal,
            list_key: $list_key:literal,
            summary: $summary:ty,
            details: $details:ty,
            body: $body:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            feature: $crate::api::feature::LocationFeature,
        }

        impl $name {
            pub fn new(session: ::std::sync::Arc<$crate::session::RestSession>) -> Self {
                Self {
                    feature: $crate::api::feature::LocationFeature::new(session, $collection, $list_key),
                }
            }

            /// Org-wide list, optionally narrowed to one location.
            pub fn list(
                &self,
                params: &$crate::api::feature::FeatureListParams,
            ) -> $crate::pagination::ItemStream<$summary> {
                self.feature.list(params)
            }

            /// Create at a location and return the new ID.
            pub async fn create(
                &self,
                location_id: &str,
                settings: &$body,
                org_id: Option<&str>,
            ) -> $crate::error::Result<String> {
                self.feature.create(location_id, settings, org_id).await
            }

            pub async fn details(
                &self,
                location_id: &str,
                feature_id: &str,
                org_id: Option<&str>,
            ) -> $crate::error::Result<$details> {
                self.feature.details(location_id, feature_id, org_id).await
            }

            pub async fn update(
                &self,
                location_id: &str,
                feature_id: &str,
                settings: &$body,
                org_id: Option<&str>,
            ) -> $crate::error::Result<()> {
                self.feature.update(location_id, feature_id, settings, org_id).await
            }

            pub async fn delete(
                &self,
                location_id: &str,
                feature_id: &str,
                org_id: Option<&str>,
            ) -> $crate::error::Result<()> {
                self.feature.delete(location_id, feature_id, org_id).await
            }
        }
    };
}

/// Add `read_forwarding` / `update_forwarding` to a feature client.
macro_rules! feature_forwarding {
    ($name:ident) => {
        impl $name {
            pub async fn read_forwarding(
                &self,
                location_id: &str,
                feature_id: &str,
                org_id: Option<&str>,
            ) -> $crate::error::Result<::webex_calling_types::CallForwarding> {
                self.feature.read_forwarding(location_id, feature_id, org_id).await
            }

            pub async fn update_forwarding(
                &self,
                location_id: &str,
                feature_id: &str,
                forwarding: &::webex_calling_types::CallForwarding,
                org_id: Option<&str>,
            ) -> $crate::error::Result<()> {
                self.feature.update_forwarding(location_id, feature_id, forwarding, org_id).await
            }
        }
    };
}
