//! Error types for the Webex Calling client.

use thiserror::Error;
use webex_calling_types::ErrorDetail;

/// Errors that can occur when using the Webex Calling client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Webex API error ({status}): {}", .detail.description().unwrap_or("no details"))]
    Rest {
        /// HTTP status code.
        status: u16,
        /// Parsed error body.
        detail: ErrorDetail,
    },

    /// Server kept returning 429 after all retries.
    #[error("Rate limited (429): retry after {retry_after:?}s")]
    RateLimited {
        /// Seconds to wait before retrying, if provided by server.
        retry_after: Option<u64>,
    },

    /// Response did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No access token configured.
    #[error("No access token: set WEBEX_ACCESS_TOKEN or pass one in ClientConfig")]
    MissingToken,

    /// Configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// HTTP status of the failed call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether retrying the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Rest { status, .. } => *status >= 500,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use webex_calling_types::ErrorItem;

    #[test]
    fn test_rest_error_display_prefers_error_entry() {
        let err = ClientError::Rest {
            status: 400,
            detail: ErrorDetail {
                message: Some("Bad request".to_string()),
                errors: Some(vec![ErrorItem {
                    description: Some("Location name already exists".to_string()),
                    error_code: Some(4003),
                }]),
                tracking_id: None,
            },
        };
        assert_eq!(err.to_string(), "Webex API error (400): Location name already exists");
        assert!(!err.is_transient());
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_transient_classification() {
        assert!(ClientError::RateLimited { retry_after: None }.is_transient());
        assert!(ClientError::Rest { status: 503, detail: ErrorDetail::default() }.is_transient());
        assert!(!ClientError::MissingToken.is_transient());
    }
}
