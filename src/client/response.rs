//! Decoding of service responses into typed per-language results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::fallback::{Document, FallbackReport, TranslationMap};

/// Top-level keys that carry metadata rather than a language.
const RESERVED_KEYS: &[&str] = &[
    "success",
    "message",
    "code",
    "warnings",
    "namespaces",
    "metadata",
];

/// One source string and its translation (text mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextPair {
    /// Input string.
    pub original: String,
    /// Translated string.
    pub translated: String,
}

/// Result for a single language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    /// Translated document (JSON mode).
    Document(Document),
    /// Ordered original/translated pairs (text mode).
    Pairs(Vec<TextPair>),
    /// Any other shape, passed through as received.
    Other(Value),
}

impl LanguageEntry {
    /// What: Borrow the document, if this entry is one.
    #[must_use]
    pub const fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(document) => Some(document),
            Self::Pairs(_) | Self::Other(_) => None,
        }
    }

    /// What: Borrow the text pairs, if this entry is a pair sequence.
    #[must_use]
    pub fn as_pairs(&self) -> Option<&[TextPair]> {
        match self {
            Self::Pairs(pairs) => Some(pairs.as_slice()),
            Self::Document(_) | Self::Other(_) => None,
        }
    }
}

/// What: Check that an array item is exactly a string `original`/`translated` pair.
///
/// Details:
/// - Items carrying any other field are not pairs, so the array stays `Other`
///   and nothing the service sent is dropped
fn is_text_pair(item: &Value) -> bool {
    item.as_object().is_some_and(|fields| {
        fields.len() == 2
            && fields.get("original").is_some_and(Value::is_string)
            && fields.get("translated").is_some_and(Value::is_string)
    })
}

impl From<Value> for LanguageEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(document) => Self::Document(document),
            Value::Array(items) if !items.is_empty() && items.iter().all(is_text_pair) => {
                Self::Pairs(
                    items
                        .into_iter()
                        .filter_map(|item| serde_json::from_value(item).ok())
                        .collect(),
                )
            }
            other => Self::Other(other),
        }
    }
}

/// Final output of a translate call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Language tag -> translated content.
    pub translations: BTreeMap<String, LanguageEntry>,
    /// Warnings reported by the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Namespace information reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Value>,
    /// Fallbacks applied during reconciliation; absent when none were needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReport>,
}

impl TranslationResult {
    /// What: Borrow the document for `language`, if present in JSON form.
    #[must_use]
    pub fn document(&self, language: &str) -> Option<&Document> {
        self.translations.get(language).and_then(LanguageEntry::as_document)
    }
}

/// Response split into the language map and lifted metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedResponse {
    /// Raw language tag -> content map.
    pub translations: TranslationMap,
    /// Warnings reported by the service.
    pub warnings: Vec<String>,
    /// Namespace information reported by the service.
    pub namespaces: Option<Value>,
}

impl DecodedResponse {
    /// What: Convert into the typed result, attaching an optional fallback report.
    #[must_use]
    pub fn into_result(self, fallback: Option<FallbackReport>) -> TranslationResult {
        TranslationResult {
            translations: self
                .translations
                .into_iter()
                .map(|(language, value)| (language, LanguageEntry::from(value)))
                .collect(),
            warnings: self.warnings,
            namespaces: self.namespaces,
            fallback,
        }
    }
}

/// What: Split a decoded response body into translations and metadata.
///
/// Inputs:
/// - `body`: Decoded JSON body from the transport
///
/// Output:
/// - `DecodedResponse` with the language map, warnings and namespaces
///
/// # Errors
/// - Returns `ApiError::Unknown` when the body is not a JSON object
///
/// Details:
/// - A `translations` object, when present, is the language map
/// - Otherwise the body itself is the language map minus reserved metadata keys
/// - Non-string warnings are ignored
pub fn decode_response(body: Value) -> Result<DecodedResponse, ApiError> {
    let mut body = match body {
        Value::Object(map) => map,
        other => {
            return Err(ApiError::Unknown(format!(
                "expected a JSON object in the response, got {}",
                value_kind(&other)
            )));
        }
    };

    let warnings = match body.get("warnings") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(ToString::to_string)
            .collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    };
    let namespaces = body.get("namespaces").filter(|v| !v.is_null()).cloned();

    let translations = match body.remove("translations") {
        Some(Value::Object(map)) => map,
        _ => {
            body.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
            body
        }
    };

    Ok(DecodedResponse {
        translations,
        warnings,
        namespaces,
    })
}

/// What: Short name of a JSON value's kind for error messages.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: A flat body is used as the language map with metadata lifted out.
    fn flat_body_strips_reserved_keys() {
        let decoded = decode_response(json!({
            "es": { "greeting": "Hola" },
            "success": true,
            "warnings": ["placeholder mismatch", 3],
            "namespaces": ["common"]
        }))
        .expect("decode");

        assert_eq!(decoded.translations.len(), 1);
        assert_eq!(decoded.translations["es"], json!({ "greeting": "Hola" }));
        assert_eq!(decoded.warnings, vec!["placeholder mismatch"]);
        assert_eq!(decoded.namespaces, Some(json!(["common"])));
    }

    #[test]
    /// What: A nested `translations` object takes precedence over the flat layout.
    fn nested_translations_object() {
        let decoded = decode_response(json!({
            "translations": { "fr": { "greeting": "Bonjour" } },
            "metadata": { "model": "x" }
        }))
        .expect("decode");
        assert_eq!(decoded.translations.len(), 1);
        assert!(decoded.translations.contains_key("fr"));
    }

    #[test]
    fn non_object_body_is_unknown_error() {
        let err = decode_response(json!(["nope"])).expect_err("should fail");
        assert_eq!(err.code(), "UNKNOWN_ERROR");
    }

    #[test]
    /// What: Entries are typed by shape and the report is a separate field.
    fn typed_entries_and_separate_report() {
        let decoded = decode_response(json!({
            "es": { "a": "A" },
            "de": [{ "original": "Hello", "translated": "Hallo" }],
            "it": "unexpected"
        }))
        .expect("decode");
        let result = decoded.into_result(None);

        assert!(result.document("es").is_some());
        let pairs = result.translations["de"].as_pairs().expect("pairs");
        assert_eq!(pairs[0].translated, "Hallo");
        assert_eq!(result.translations["it"], LanguageEntry::Other(json!("unexpected")));

        let value = serde_json::to_value(&result).expect("serialize");
        assert!(value.get("fallback").is_none());
        assert!(value.get("warnings").is_none());
        assert_eq!(value["translations"]["es"], json!({ "a": "A" }));
    }

    #[test]
    /// What: Pair-like items with extra fields pass through untouched.
    ///
    /// Inputs:
    /// - `de` items carrying a `key` next to `original`/`translated`.
    ///
    /// Output:
    /// - The entry is `Other` and serializes back with every field intact.
    fn richer_pair_items_are_not_truncated() {
        let items = json!([{ "original": "Hi", "translated": "Hallo", "key": "greeting" }]);
        let result = decode_response(json!({ "de": items.clone() }))
            .expect("decode")
            .into_result(None);

        assert_eq!(result.translations["de"], LanguageEntry::Other(items.clone()));
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["translations"]["de"], items);

        let reparsed: TranslationResult = serde_json::from_value(value).expect("deserialize");
        assert_eq!(reparsed.translations["de"], LanguageEntry::Other(items));
    }
}
