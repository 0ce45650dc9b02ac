//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use langbridge::client::{ApiError, HttpMethod, RequestBody, Transport, TranslationClient};
use langbridge::config::ClientConfig;
use langbridge::fallback::Document;
use serde_json::Value;

/// One request seen by the scripted transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Operation name.
    pub operation: String,
    /// Body as sent.
    pub body: RequestBody,
    /// HTTP method.
    pub method: HttpMethod,
}

/// What: Transport that replays queued outcomes and records every request.
///
/// Details:
/// - Runs out of script -> `ApiError::Unknown`
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<Value, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    /// What: Transport answering with the given outcomes in order.
    pub fn new(outcomes: Vec<Result<Value, ApiError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// What: Transport answering every call with one successful body.
    pub fn replying(body: Value) -> Self {
        Self::new(vec![Ok(body)])
    }

    /// What: Snapshot of the recorded requests.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Transport for ScriptedTransport {
    fn call(
        &self,
        operation: &str,
        body: &RequestBody,
        method: HttpMethod,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(RecordedCall {
                operation: operation.to_string(),
                body: body.clone(),
                method,
            });
        let outcome = self
            .outcomes
            .lock()
            .expect("outcomes lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Unknown("script exhausted".into())));
        std::future::ready(outcome)
    }
}

/// What: Client over a scripted transport with a dummy key.
pub fn client_with(transport: ScriptedTransport) -> TranslationClient<ScriptedTransport> {
    let config = ClientConfig::new("test-key").expect("test config");
    TranslationClient::with_transport(config, transport)
}

/// What: Unwrap a `json!` object literal into a `Document`.
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("test fixture must be an object, got {other}"),
    }
}

/// What: Target languages sent in a recorded request.
pub fn sent_targets(call: &RecordedCall) -> Vec<String> {
    call.body["targetLanguages"]
        .as_array()
        .expect("targetLanguages array")
        .iter()
        .filter_map(Value::as_str)
        .map(ToString::to_string)
        .collect()
}
