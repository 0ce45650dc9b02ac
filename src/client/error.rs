//! Error taxonomy for client construction and transport failures.

use std::time::Duration;

use thiserror::Error;

/// What: Error type for every fallible client operation.
///
/// Output: Implements `Display`/`Error`; each variant exposes a stable `code()`
/// and an HTTP-like `status_code()` for programmatic handling.
///
/// Details:
/// - Reconciliation never produces these; only construction, configuration and
///   the transport boundary do.
/// - Errors are propagated unchanged through retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key was supplied when building the client configuration.
    #[error("an API key is required to create a translation client")]
    MissingApiKey,
    /// The service answered with a non-success status.
    #[error("{message}")]
    Http {
        /// HTTP status returned by the service.
        status: u16,
        /// Message from the response body, or a default built from the status.
        message: String,
        /// Error code from the response body, if any.
        code: Option<String>,
    },
    /// The request was aborted after the configured timeout.
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    /// Connection, DNS or body-decoding failure during transport.
    #[error("network error: {0}")]
    Network(String),
    /// A failure that could not be classified.
    #[error("unknown error: {0}")]
    Unknown(String),
    /// The caller passed arguments that cannot form a valid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// A configuration file or value could not be used.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// What: Build an `Http` error from a status and an optional JSON error body.
    ///
    /// Inputs:
    /// - `status`: Non-success HTTP status code
    /// - `body`: Raw response body (may be empty or non-JSON)
    ///
    /// Output:
    /// - `ApiError::Http` with `message`/`code` taken from the body when present
    ///
    /// Details:
    /// - Default message is `HTTP <status>: <reason phrase>`
    #[must_use]
    pub fn from_http_status(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };
        let message = field("message").unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        });
        Self::Http {
            status: status.as_u16(),
            message,
            code: field("code"),
        }
    }

    /// What: Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::Http { code, .. } => code.as_deref().unwrap_or("HTTP_ERROR"),
            Self::Timeout(_) => "TIMEOUT",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Unknown(_) => "UNKNOWN_ERROR",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// What: HTTP-like status associated with the error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingApiKey | Self::InvalidRequest(_) | Self::Config(_) => 400,
            Self::Http { status, .. } => *status,
            Self::Timeout(_) => 408,
            Self::Network(_) | Self::Unknown(_) => 500,
        }
    }

    /// What: Whether a retry could plausibly succeed.
    ///
    /// Details:
    /// - Timeouts, network failures and 5xx responses are retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::MissingApiKey | Self::Unknown(_) | Self::InvalidRequest(_) | Self::Config(_) => {
                false
            }
        }
    }
}
