//! Translation client: request building, the single transport call, and reconciliation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use langbridge::client::{JsonTranslateOptions, TranslationClient};
//! use langbridge::config::ClientConfig;
//!
//! # async fn demo() -> Result<(), langbridge::client::ApiError> {
//! let client = TranslationClient::new(ClientConfig::from_env()?)?;
//! let source = serde_json::json!({ "greeting": "Hello" });
//! let source = source.as_object().cloned().unwrap_or_default();
//! let result = client
//!     .translate_json(&source, &JsonTranslateOptions::new(["es", "pt-BR"]))
//!     .await?;
//! if let Some(report) = &result.fallback {
//!     println!("fallbacks used: {report:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod options;
mod request;
mod response;
mod transport;

pub use error::ApiError;
pub use options::{JsonTranslateOptions, TextTranslateOptions};
pub use request::{
    OPERATION_TRANSLATE, RequestBody, build_json_request, build_text_request, stringify_document,
};
pub use response::{DecodedResponse, LanguageEntry, TextPair, TranslationResult, decode_response};
pub use transport::{HttpMethod, HttpTransport, Transport};

use serde_json::Value;

use crate::config::ClientConfig;
use crate::fallback::{Document, reconcile, resolve_targets};

/// Client bound to one immutable configuration and one transport.
///
/// Calls share no mutable state, so one client can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TranslationClient<T = HttpTransport> {
    /// Endpoint, credentials, timeout and retry policy.
    config: ClientConfig,
    /// Request/response exchange.
    transport: T,
}

impl TranslationClient<HttpTransport> {
    /// What: Create a client talking HTTP to `config.base_url`.
    ///
    /// # Errors
    /// - Returns `ApiError::Config` if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> TranslationClient<T> {
    /// What: Create a client over a custom transport.
    pub const fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// What: Borrow the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// What: Borrow the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// What: Translate a nested JSON document and fill any gaps in the result.
    ///
    /// Inputs:
    /// - `source`: Document to translate (not modified)
    /// - `options`: Languages, service flags and fallback switches
    ///
    /// Output:
    /// - `TranslationResult` with one document per resolved language and a
    ///   fallback report when any gap was filled
    ///
    /// # Errors
    /// - Returns `ApiError::InvalidRequest` when no target language is given or a tag is blank
    /// - Propagates transport errors unchanged
    ///
    /// Details:
    /// - Regional tags add their base language to the request (see `resolve_targets`)
    /// - Exactly one transport call is made unless retries are configured
    pub async fn translate_json(
        &self,
        source: &Document,
        options: &JsonTranslateOptions,
    ) -> Result<TranslationResult, ApiError> {
        ensure_targets(&options.target_languages)?;

        let resolved = resolve_targets(&options.target_languages, options.regional_fallback);
        let body = build_json_request(
            stringify_document(source)?,
            options,
            &resolved.processed_targets,
        );
        tracing::info!(
            source_language = %options.source_language,
            targets = ?resolved.processed_targets,
            keys = source.len(),
            "translating JSON document"
        );

        let raw = self
            .call_with_retry(OPERATION_TRANSLATE, &body, HttpMethod::Post)
            .await?;
        let mut decoded = decode_response(raw)?;
        for warning in &decoded.warnings {
            tracing::warn!(warning = %warning, "translation service warning");
        }

        let reconciled = reconcile(
            std::mem::take(&mut decoded.translations),
            source,
            &options.target_languages,
            &resolved.regional_map,
            &options.fallback_policy(),
        );
        if let Some(report) = &reconciled.report {
            tracing::info!(
                source_fallbacks = report.languages_fallback_to_source.len(),
                regional_fallbacks = report.regional_fallbacks.len(),
                partial_languages = report.keys_fallback.len(),
                "applied translation fallbacks"
            );
        }

        decoded.translations = reconciled.translations;
        Ok(decoded.into_result(reconciled.report))
    }

    /// What: Translate plain strings; results are original/translated pairs.
    ///
    /// # Errors
    /// - Returns `ApiError::InvalidRequest` for missing or blank targets, or when no text is given
    /// - Propagates transport errors unchanged
    ///
    /// Details:
    /// - Text results are not reconciled; missing languages stay missing
    pub async fn translate_text(
        &self,
        lines: &[String],
        options: &TextTranslateOptions,
    ) -> Result<TranslationResult, ApiError> {
        ensure_targets(&options.target_languages)?;
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(ApiError::InvalidRequest("no text to translate".into()));
        }

        let body = build_text_request(lines, options);
        tracing::info!(
            source_language = %options.source_language,
            targets = ?options.target_languages,
            lines = lines.len(),
            "translating text"
        );
        let raw = self
            .call_with_retry(OPERATION_TRANSLATE, &body, HttpMethod::Post)
            .await?;
        Ok(decode_response(raw)?.into_result(None))
    }

    /// What: `translate_json` with pluralization forced on.
    ///
    /// # Errors
    /// - Same as `translate_json`
    pub async fn translate_json_with_pluralization(
        &self,
        source: &Document,
        options: &JsonTranslateOptions,
    ) -> Result<TranslationResult, ApiError> {
        let options = JsonTranslateOptions {
            enable_pluralization: true,
            ..options.clone()
        };
        self.translate_json(source, &options).await
    }

    /// What: `translate_json` tagged with a namespace and exported per namespace.
    ///
    /// # Errors
    /// - Same as `translate_json`
    pub async fn translate_json_by_namespace(
        &self,
        source: &Document,
        namespace: &str,
        options: &JsonTranslateOptions,
    ) -> Result<TranslationResult, ApiError> {
        let options = JsonTranslateOptions {
            namespace: Some(namespace.to_string()),
            group_by_namespace: true,
            export_per_namespace: true,
            ..options.clone()
        };
        self.translate_json(source, &options).await
    }

    /// What: Call the transport, retrying retryable failures per configuration.
    ///
    /// Details:
    /// - Attempt `n` (1-based) waits `n * retry_backoff` before retrying
    /// - The final error is returned exactly as the transport produced it
    async fn call_with_retry(
        &self,
        operation: &str,
        body: &RequestBody,
        method: HttpMethod,
    ) -> Result<Value, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            match self.transport.call(operation, body, method).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.retry_backoff.saturating_mul(attempt);
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        code = err.code(),
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "retrying translation request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// What: Reject requests with no target language or with a blank tag.
///
/// Details:
/// - A blank tag would be sent to the service and then reported as a source fallback
fn ensure_targets(targets: &[String]) -> Result<(), ApiError> {
    if targets.is_empty() {
        return Err(ApiError::InvalidRequest(
            "at least one target language is required".into(),
        ));
    }
    if let Some(position) = targets.iter().position(|t| t.trim().is_empty()) {
        return Err(ApiError::InvalidRequest(format!(
            "target language at position {position} is blank"
        )));
    }
    Ok(())
}
