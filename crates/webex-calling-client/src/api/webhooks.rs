//! Webhooks (`webhooks`).

use std::sync::Arc;

use webex_calling_types::{Webhook, WebhookEvent, WebhookResource};

use crate::api_child::ApiChild;
use crate::error::Result;
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

pub struct WebhooksApi {
    child: ApiChild,
}

impl WebhooksApi {
    pub fn new(session: Arc<RestSession>) -> Self {
        Self { child: ApiChild::new(session, "webhooks") }
    }

    /// Webhooks of the caller, or of the whole org with `owned_by = "org"`.
    pub fn list(&self, owned_by: Option<&str>, max: Option<u32>) -> ItemStream<Webhook> {
        let params = QueryParams::new().with_opt("ownedBy", owned_by).with_opt("max", max);
        self.child.paginate(self.child.ep(None), params, "items")
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: &str,
        target_url: &str,
        resource: WebhookResource,
        event: WebhookEvent,
        filter: Option<&str>,
        secret: Option<&str>,
        owned_by: Option<&str>,
    ) -> Result<Webhook> {
        let body = Webhook {
            name: Some(name.to_string()),
            target_url: Some(target_url.to_string()),
            resource: Some(resource),
            event: Some(event),
            filter: filter.map(str::to_string),
            secret: secret.map(str::to_string),
            owned_by: owned_by.map(str::to_string),
            ..Default::default()
        };
        self.child.post(&self.child.ep(None), &QueryParams::new(), &body).await
    }

    pub async fn details(&self, webhook_id: &str) -> Result<Webhook> {
        self.child.get(&self.child.ep(Some(webhook_id)), &QueryParams::new()).await
    }

    /// Update name, target URL, secret, owner or status.
    pub async fn update(&self, webhook_id: &str, update: &Webhook) -> Result<Webhook> {
        let body = Webhook {
            name: update.name.clone(),
            target_url: update.target_url.clone(),
            secret: update.secret.clone(),
            owned_by: update.owned_by.clone(),
            status: update.status.clone(),
            ..Default::default()
        };
        self.child.put(&self.child.ep(Some(webhook_id)), &QueryParams::new(), &body).await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        self.child.delete(&self.child.ep(Some(webhook_id)), &QueryParams::new()).await
    }
}
