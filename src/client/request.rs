//! Request bodies handed to the transport.

use serde_json::{Value, json};

use super::error::ApiError;
use super::options::{JsonTranslateOptions, TextTranslateOptions};
use crate::fallback::Document;

/// Operation name for both JSON and text translation.
pub const OPERATION_TRANSLATE: &str = "translate";

/// Flat key/value body sent to the service.
pub type RequestBody = serde_json::Map<String, Value>;

/// What: Serialize the source document the way the service expects it.
///
/// Output:
/// - Pretty-printed JSON with two-space indentation
///
/// # Errors
/// - Returns `ApiError::InvalidRequest` if serialization fails
pub fn stringify_document(document: &Document) -> Result<String, ApiError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| ApiError::InvalidRequest(format!("failed to serialize source document: {e}")))
}

/// What: Build the body for a JSON translation request.
///
/// Inputs:
/// - `source_text`: Stringified source document
/// - `options`: Caller options
/// - `processed_targets`: Deduplicated target list including synthesized base languages
///
/// Output:
/// - Request body with the service's camelCase field names
///
/// Details:
/// - `namespace` is only sent when set
#[must_use]
pub fn build_json_request(
    source_text: String,
    options: &JsonTranslateOptions,
    processed_targets: &[String],
) -> RequestBody {
    let mut body = RequestBody::new();
    body.insert("inputMethod".into(), json!("text"));
    body.insert("text".into(), Value::String(source_text));
    body.insert("sourceLanguage".into(), json!(options.source_language));
    body.insert("targetLanguages".into(), json!(processed_targets));
    body.insert("outputFormat".into(), json!("json"));
    body.insert(
        "preservePlaceholders".into(),
        json!(options.preserve_placeholders),
    );
    body.insert(
        "enablePluralization".into(),
        json!(options.enable_pluralization),
    );
    if let Some(namespace) = &options.namespace {
        body.insert("namespace".into(), json!(namespace));
    }
    body.insert(
        "groupByNamespace".into(),
        json!(options.group_by_namespace),
    );
    body.insert(
        "exportPerNamespace".into(),
        json!(options.export_per_namespace),
    );
    body
}

/// What: Build the body for a plain-text translation request.
///
/// Inputs:
/// - `lines`: Strings to translate, sent newline-joined
/// - `options`: Caller options
#[must_use]
pub fn build_text_request(lines: &[String], options: &TextTranslateOptions) -> RequestBody {
    let mut body = RequestBody::new();
    body.insert("inputMethod".into(), json!("text"));
    body.insert("text".into(), Value::String(lines.join("\n")));
    body.insert("sourceLanguage".into(), json!(options.source_language));
    body.insert("targetLanguages".into(), json!(options.target_languages));
    body.insert("outputFormat".into(), json!("text"));
    body.insert(
        "preservePlaceholders".into(),
        json!(options.preserve_placeholders),
    );
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: JSON requests carry every field the service reads.
    ///
    /// Details:
    /// - `targetLanguages` is the processed list, not the caller list.
    /// - The source text uses two-space indentation.
    fn json_request_fields() {
        let mut document = Document::new();
        document.insert("greeting".into(), json!("Hello"));
        let text = stringify_document(&document).expect("stringify");
        assert_eq!(text, "{\n  \"greeting\": \"Hello\"\n}");

        let options = JsonTranslateOptions::new(["pt-BR"]);
        let processed = vec!["pt".to_string(), "pt-BR".to_string()];
        let body = build_json_request(text.clone(), &options, &processed);

        assert_eq!(body["inputMethod"], json!("text"));
        assert_eq!(body["text"], json!(text));
        assert_eq!(body["sourceLanguage"], json!("en"));
        assert_eq!(body["targetLanguages"], json!(["pt", "pt-BR"]));
        assert_eq!(body["outputFormat"], json!("json"));
        assert_eq!(body["preservePlaceholders"], json!(true));
        assert_eq!(body["enablePluralization"], json!(false));
        assert_eq!(body["groupByNamespace"], json!(false));
        assert_eq!(body["exportPerNamespace"], json!(false));
        assert!(!body.contains_key("namespace"));
    }

    #[test]
    fn json_request_includes_namespace_when_set() {
        let options = JsonTranslateOptions {
            namespace: Some("common".into()),
            ..JsonTranslateOptions::new(["es"])
        };
        let body = build_json_request("{}".into(), &options, &options.target_languages);
        assert_eq!(body["namespace"], json!("common"));
    }

    #[test]
    fn text_request_joins_lines() {
        let options = TextTranslateOptions::new(["de"]);
        let body = build_text_request(&["Hello".into(), "World".into()], &options);
        assert_eq!(body["text"], json!("Hello\nWorld"));
        assert_eq!(body["outputFormat"], json!("text"));
        assert_eq!(body["targetLanguages"], json!(["de"]));
    }
}
