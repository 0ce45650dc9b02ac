//! Transport boundary: one request/response exchange with the translation service.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;

use super::error::ApiError;
use super::request::RequestBody;
use crate::config::{ApiKey, ClientConfig};

/// HTTP method used for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Body sent as query parameters.
    Get,
    /// Body sent as JSON.
    Post,
}

/// What: Exchange a request body for a decoded JSON response.
///
/// Details:
/// - Implementations classify every failure into an `ApiError` kind
/// - The client calls `call` once per translate operation (plus configured retries)
pub trait Transport: Send + Sync {
    /// What: Send `body` to `operation` and return the decoded JSON body.
    ///
    /// # Errors
    /// - `ApiError::Http` for non-success statuses
    /// - `ApiError::Timeout` when the configured timeout elapses
    /// - `ApiError::Network` for connection failures and malformed bodies
    fn call(
        &self,
        operation: &str,
        body: &RequestBody,
        method: HttpMethod,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// `reqwest`-backed transport talking to `ClientConfig::base_url`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Pooled HTTP client with the configured timeout.
    client: reqwest::Client,
    /// Endpoint prefix for operations.
    base_url: String,
    /// Credential sent as a bearer token.
    api_key: ApiKey,
    /// Timeout reported in `ApiError::Timeout`.
    timeout: Duration,
}

impl HttpTransport {
    /// What: Build a transport from client configuration.
    ///
    /// # Errors
    /// - Returns `ApiError::Config` if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout.min(Duration::from_secs(15)))
            .timeout(config.timeout)
            .user_agent(format!("langbridge/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    /// What: Full URL for an operation name.
    fn url_for(&self, operation: &str) -> String {
        format!("{}/{}", self.base_url, operation.trim_start_matches('/'))
    }
}

/// What: Flatten a request body into query parameters.
///
/// Details:
/// - Strings are sent verbatim, arrays are comma-joined, other values use their JSON text
fn query_pairs(body: &RequestBody) -> Vec<(String, String)> {
    body.iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| item.as_str().map_or_else(|| item.to_string(), ToString::to_string))
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}

/// What: Classify a `reqwest` failure.
fn classify(err: &reqwest::Error, timeout: Duration) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout(timeout)
    } else {
        ApiError::Network(err.to_string())
    }
}

impl Transport for HttpTransport {
    fn call(
        &self,
        operation: &str,
        body: &RequestBody,
        method: HttpMethod,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send {
        let url = self.url_for(operation);
        let builder = match method {
            HttpMethod::Post => Ok(self.client.post(&url).json(body)),
            HttpMethod::Get => reqwest::Url::parse(&url)
                .map(|mut parsed| {
                    parsed.query_pairs_mut().extend_pairs(query_pairs(body));
                    self.client.get(parsed)
                })
                .map_err(|e| ApiError::Config(format!("invalid service URL {url}: {e}"))),
        }
        .map(|builder| {
            builder
                .bearer_auth(self.api_key.expose())
                .header(ACCEPT, HeaderValue::from_static("application/json"))
        });
        let timeout = self.timeout;

        async move {
            let builder = builder?;
            tracing::debug!(url = %url, ?method, "sending translation request");
            let response = builder.send().await.map_err(|e| classify(&e, timeout))?;
            let status = response.status();
            let text = response.text().await.map_err(|e| classify(&e, timeout))?;

            if !status.is_success() {
                let err = ApiError::from_http_status(status, &text);
                tracing::warn!(
                    status = status.as_u16(),
                    code = err.code(),
                    "translation request failed"
                );
                return Err(err);
            }

            serde_json::from_str(&text).map_err(|e| {
                ApiError::Network(format!("response body is not valid JSON: {e}"))
            })
        }
    }
}
