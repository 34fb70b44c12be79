//! Base of every resource-group client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use webex_calling_types::IdOnly;

use crate::error::{ClientError, Result};
use crate::pagination::ItemStream;
use crate::params::QueryParams;
use crate::session::RestSession;

/// Shared session plus the REST base path of one resource group.
#[derive(Clone)]
pub struct ApiChild {
    session: Arc<RestSession>,
    base: String,
}

impl ApiChild {
    pub fn new(session: Arc<RestSession>, base: impl Into<String>) -> Self {
        Self { session, base: base.into() }
    }

    pub fn session(&self) -> &Arc<RestSession> {
        &self.session
    }

    /// Endpoint URL for `path` below this group's base.
    ///
    /// Segments are joined with exactly one `/`. A base that is already an
    /// absolute URL replaces the session base URL.
    pub fn ep(&self, path: Option<&str>) -> String {
        let base = self.base.trim_matches('/');
        let root = if base.starts_with("https://") || base.starts_with("http://") {
            base.to_string()
        } else {
            format!("{}/{}", self.session.base_url().trim_end_matches('/'), base)
        };
        match path.map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) {
            Some(path) => format!("{root}/{path}"),
            None => root,
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, url: &str, params: &QueryParams) -> Result<R> {
        decode(self.session.rest_get(url, params, None).await?)
    }

    pub async fn post<B, R>(&self, url: &str, params: &QueryParams, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        decode(self.session.rest_post(url, params, Some(&body)).await?)
    }

    /// POST whose response body is not needed.
    pub async fn post_empty<B>(&self, url: &str, params: &QueryParams, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        self.session.rest_post(url, params, body.as_ref()).await?;
        Ok(())
    }

    /// POST returning the `id` of the created object.
    pub async fn post_for_id<B>(&self, url: &str, params: &QueryParams, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let created: IdOnly = self.post(url, params, body).await?;
        created.id.ok_or_else(|| ClientError::InvalidResponse("create response has no id".to_string()))
    }

    pub async fn put<B, R>(&self, url: &str, params: &QueryParams, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        decode(self.session.rest_put(url, params, Some(&body)).await?)
    }

    /// PUT whose response body is not needed.
    pub async fn put_empty<B>(&self, url: &str, params: &QueryParams, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.session.rest_put(url, params, Some(&body)).await?;
        Ok(())
    }

    /// PUT returning the `id` echoed by the server.
    pub async fn put_for_id<B>(&self, url: &str, params: &QueryParams, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let updated: IdOnly = self.put(url, params, body).await?;
        updated.id.ok_or_else(|| ClientError::InvalidResponse("update response has no id".to_string()))
    }

    pub async fn patch<B, R>(
        &self,
        url: &str,
        params: &QueryParams,
        body: &B,
        content_type: Option<&str>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        decode(self.session.rest_patch(url, params, Some(&body), content_type).await?)
    }

    pub async fn delete(&self, url: &str, params: &QueryParams) -> Result<()> {
        self.session.rest_delete(url, params, None).await?;
        Ok(())
    }

    /// DELETE carrying a JSON body.
    pub async fn delete_with_body<B>(&self, url: &str, params: &QueryParams, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.session.rest_delete(url, params, Some(&body)).await?;
        Ok(())
    }

    /// GET a single response and return the array under `key`.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &QueryParams,
        key: &str,
    ) -> Result<Vec<T>> {
        let body = self.session.rest_get(url, params, None).await?;
        match body.and_then(|mut body| body.get_mut(key).map(Value::take)) {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn paginate<T>(&self, url: String, params: QueryParams, item_key: &'static str) -> ItemStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.session.follow_pagination(url, params, item_key)
    }

    /// [`ApiChild::paginate`] with query parameters flattened from `filters`.
    pub fn paginate_filtered<P, T>(&self, url: String, filters: &P, item_key: &'static str) -> ItemStream<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        match QueryParams::from_serializable(filters) {
            Ok(params) => self.paginate(url, params, item_key),
            Err(e) => Box::pin(futures::stream::once(async move { Err(e) })),
        }
    }
}

fn decode<R: DeserializeOwned>(body: Option<Value>) -> Result<R> {
    let body = body.ok_or_else(|| ClientError::InvalidResponse("empty response body".to_string()))?;
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn child(base: &str) -> ApiChild {
        let session = match RestSession::new(ClientConfig::new("token")) {
            Ok(session) => Arc::new(session),
            Err(e) => panic!("session: {e}"),
        };
        ApiChild::new(session, base)
    }

    #[test]
    fn test_ep_joins_with_single_slash() {
        let api = child("telephony/config/");
        assert_eq!(api.ep(None), "https://webexapis.com/v1/telephony/config");
        assert_eq!(
            api.ep(Some("/locations/L1/queues")),
            "https://webexapis.com/v1/telephony/config/locations/L1/queues"
        );
    }

    #[test]
    fn test_ep_absolute_base() {
        let api = child("https://analytics-calling.webexapis.com/v1/cdr_feed");
        assert_eq!(api.ep(None), "https://analytics-calling.webexapis.com/v1/cdr_feed");
    }

    #[test]
    fn test_decode_empty_body_is_error() {
        assert!(matches!(decode::<IdOnly>(None), Err(ClientError::InvalidResponse(_))));
    }
}
