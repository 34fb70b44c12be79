//! Client configuration.

use std::fmt;

use crate::error::{ClientError, Result};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1";

/// Backoff settings for 429 and retryable 5xx responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3, base_delay_ms: 500, max_delay_ms: 30_000 }
    }
}

#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
    pub timeout_secs: u64,
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: String::new(),
            timeout_secs: 60,
            retry: RetryConfig::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("retry", &self.retry)
            .finish()
    }
}

impl ClientConfig {
    /// Default configuration with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), ..Default::default() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Build from `WEBEX_ACCESS_TOKEN`, `WEBEX_BASE_URL` and `WEBEX_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("WEBEX_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClientError::MissingToken)?;
        let mut config = Self::new(access_token);
        if let Ok(base_url) = std::env::var("WEBEX_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("WEBEX_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                ClientError::InvalidConfig(format!("WEBEX_TIMEOUT_SECS is not a number: {timeout}"))
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url, "https://webexapis.com/v1");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.retry, RetryConfig { max_retries: 3, base_delay_ms: 500, max_delay_ms: 30_000 });
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", ClientConfig::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
    }
}
