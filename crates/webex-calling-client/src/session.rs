//! Authenticated HTTP session shared by all resource-group clients.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;
use webex_calling_types::ErrorDetail;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::params::QueryParams;

const JSON: &str = "application/json";

/// Owns the HTTP client and configuration. Cheap to share behind an `Arc`.
pub struct RestSession {
    client: Client,
    config: ClientConfig,
}

impl RestSession {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.access_token.trim().is_empty() {
            return Err(ClientError::MissingToken);
        }
        url::Url::parse(&config.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base URL {:?}: {e}", config.base_url))
        })?;
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn rest_get(
        &self,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let resp = self.execute(Method::GET, url, params, body, JSON).await?;
        read_json(resp).await
    }

    pub async fn rest_post(
        &self,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let resp = self.execute(Method::POST, url, params, body, JSON).await?;
        read_json(resp).await
    }

    pub async fn rest_put(
        &self,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let resp = self.execute(Method::PUT, url, params, body, JSON).await?;
        read_json(resp).await
    }

    /// PATCH with an explicit content type (e.g. `application/json-patch+json`).
    pub async fn rest_patch(
        &self,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
        content_type: Option<&str>,
    ) -> Result<Option<Value>> {
        let resp = self
            .execute(Method::PATCH, url, params, body, content_type.unwrap_or(JSON))
            .await?;
        read_json(resp).await
    }

    pub async fn rest_delete(
        &self,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let resp = self.execute(Method::DELETE, url, params, body, JSON).await?;
        read_json(resp).await
    }

    /// Send a request, retrying 429 always and 5xx for GET only.
    ///
    /// Returns the successful response with its body still unread.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
        content_type: &str,
    ) -> Result<Response> {
        let retry = &self.config.retry;
        let mut attempts = 0;
        let mut delay = retry.base_delay_ms;

        loop {
            attempts += 1;
            match self.execute_once(&method, url, params, body, content_type).await {
                Ok(resp) => return Ok(resp),
                Err(ClientError::RateLimited { retry_after }) if attempts <= retry.max_retries => {
                    let wait = retry_after
                        .map(Duration::from_secs)
                        .unwrap_or_else(|| Duration::from_millis(delay));
                    warn!(%method, url, ?wait, attempt = attempts, "Rate limited, backing off");
                    tokio::time::sleep(wait).await;
                    delay = next_delay(delay, retry.max_delay_ms);
                },
                Err(ClientError::Rest { status, .. })
                    if status >= 500 && method == Method::GET && attempts <= retry.max_retries =>
                {
                    warn!(%method, url, status, attempt = attempts, "Server error, retrying");
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    delay = next_delay(delay, retry.max_delay_ms);
                },
                Err(e) => return Err(e),
            }
        }
    }

    async fn execute_once(
        &self,
        method: &Method,
        url: &str,
        params: &QueryParams,
        body: Option<&Value>,
        content_type: &str,
    ) -> Result<Response> {
        let tracking_id = format!("WXC_RS_{}", Uuid::new_v4());
        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.config.access_token)
            .header("TrackingID", &tracking_id);
        if !params.is_empty() {
            request = request.query(params.pairs());
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, content_type).body(serde_json::to_vec(body)?);
        }

        debug!(%method, url, %tracking_id, "Webex request");
        let resp = request.send().await?;
        let status = resp.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp.headers().get(RETRY_AFTER).and_then(parse_retry_after);
            return Err(ClientError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorDetail>(&text).unwrap_or_else(|_| ErrorDetail {
                message: (!text.is_empty()).then_some(text),
                ..Default::default()
            });
            debug!(%method, url, %tracking_id, status = status.as_u16(), "Webex request failed");
            return Err(ClientError::Rest { status: status.as_u16(), detail });
        }

        Ok(resp)
    }
}

/// Doubled backoff, capped at `max_ms`.
fn next_delay(delay_ms: u64, max_ms: u64) -> u64 {
    delay_ms.saturating_mul(2).min(max_ms)
}

fn parse_retry_after(value: &HeaderValue) -> Option<u64> {
    value.to_str().ok().and_then(|s| s.trim().parse().ok())
}

/// Body as JSON, `None` for 204 or an empty body.
pub(crate) async fn read_json(resp: Response) -> Result<Option<Value>> {
    if resp.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    let bytes = resp.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_token() {
        assert!(matches!(RestSession::new(ClientConfig::new("  ")), Err(ClientError::MissingToken)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = ClientConfig::new("token").with_base_url("not a url");
        assert!(matches!(RestSession::new(config), Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(parse_retry_after(&HeaderValue::from_static("7")), Some(7));
        assert_eq!(parse_retry_after(&HeaderValue::from_static("soon")), None);
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        assert_eq!(next_delay(500, 30_000), 1_000);
        assert_eq!(next_delay(20_000, 30_000), 30_000);
    }

    #[test]
    fn test_backoff_saturates_on_huge_delay() {
        assert_eq!(next_delay(u64::MAX / 2 + 1, u64::MAX), u64::MAX);
        assert_eq!(next_delay(u64::MAX, 60_000), 60_000);
    }
}
