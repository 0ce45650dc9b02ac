//! Gap filling for per-language translation maps returned by the service.

use serde_json::Value;

use super::missing::find_missing_keys;
use super::path::{get_path, set_path};
use super::regional::RegionalMap;
use super::report::FallbackReport;
use super::{Document, TranslationMap};

/// Fallback switches applied during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Language the source document is written in.
    pub source_language: String,
    /// Fill absent languages and missing keys from the source document.
    pub fallback_to_source: bool,
    /// Let regional tags borrow their base language's translation first.
    pub regional_fallback: bool,
    /// Requested last-resort language; accepted but the source document is always substituted.
    pub fallback_language: Option<String>,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            fallback_to_source: true,
            regional_fallback: true,
            fallback_language: None,
        }
    }
}

/// Completed translation map together with the report of what was filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// Per-language results after gap filling.
    pub translations: TranslationMap,
    /// Present only when at least one fallback was applied.
    pub report: Option<FallbackReport>,
}

/// What: Check whether a raw per-language entry carries no usable content.
///
/// Details:
/// - `null`, `""`, `{}` and `[]` are blank; everything else is content
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// What: Fill every gap in a raw translation map using the fallback policy.
///
/// Inputs:
/// - `translations`: Raw per-language map from the service (consumed and completed)
/// - `source`: Source document the translations were produced from
/// - `target_languages`: Languages the caller asked for
/// - `regional_map`: Regional tag -> base tag, from `resolve_targets`
/// - `policy`: Fallback switches
///
/// Output:
/// - `Reconciled` with the completed map and an optional report
///
/// Details:
/// - Absent or blank languages are copied from their base language (regional
///   fallback) when it came back non-empty, otherwise from the source document
///   (source fallback), otherwise dropped from the result
/// - Languages present as objects get their missing keys filled path by path,
///   preferring the base language value and then the source value; this only
///   happens when `fallback_to_source` is enabled
/// - Base languages are read from the raw response as received, never from
///   entries patched earlier in the same pass, so target order does not matter
/// - Complete translations are left untouched and produce no report
#[must_use]
pub fn reconcile(
    mut translations: TranslationMap,
    source: &Document,
    target_languages: &[String],
    regional_map: &RegionalMap,
    policy: &FallbackPolicy,
) -> Reconciled {
    if let Some(fallback_language) = policy.fallback_language.as_deref()
        && fallback_language != policy.source_language
    {
        tracing::warn!(
            fallback_language = %fallback_language,
            source_language = %policy.source_language,
            "fallback language override is not applied; source content is substituted"
        );
    }

    let raw_bases: TranslationMap = if policy.regional_fallback {
        regional_map
            .values()
            .filter_map(|base| {
                translations
                    .get(base)
                    .map(|value| (base.clone(), value.clone()))
            })
            .collect()
    } else {
        TranslationMap::new()
    };

    let mut report = FallbackReport::default();
    for language in target_languages {
        let base = if policy.regional_fallback {
            regional_map.get(language)
        } else {
            None
        };

        if translations.get(language).is_none_or(is_blank) {
            fill_absent_language(
                &mut translations,
                language,
                base.and_then(|b| raw_bases.get(b).map(|doc| (b.as_str(), doc))),
                source,
                policy,
                &mut report,
            );
            continue;
        }

        if !policy.fallback_to_source {
            continue;
        }
        let Some(Value::Object(document)) = translations.get_mut(language) else {
            continue;
        };
        let base_document = base
            .and_then(|b| raw_bases.get(b))
            .and_then(Value::as_object);
        let missing = fill_missing_keys(document, source, base_document);
        if !missing.is_empty() {
            tracing::debug!(
                language = %language,
                count = missing.len(),
                "filled missing keys from fallback"
            );
        }
        report.record_missing_keys(language, missing);
    }

    Reconciled {
        translations,
        report: report.into_used(),
    }
}

/// What: Resolve a language the service returned nothing for.
///
/// Inputs:
/// - `translations`: Map being completed
/// - `language`: Target language with no usable entry
/// - `base`: Base tag and its raw entry, when regional fallback applies
/// - `source`: Source document
/// - `policy`: Fallback switches
/// - `report`: Report to record into
fn fill_absent_language(
    translations: &mut TranslationMap,
    language: &str,
    base: Option<(&str, &Value)>,
    source: &Document,
    policy: &FallbackPolicy,
    report: &mut FallbackReport,
) {
    if let Some((base_language, base_entry)) = base
        && !is_blank(base_entry)
    {
        tracing::debug!(language = %language, base = %base_language, "using regional fallback");
        translations.insert(language.to_string(), base_entry.clone());
        report.record_regional_fallback(language, base_language);
        return;
    }

    if policy.fallback_to_source {
        tracing::debug!(language = %language, "translation missing; using source content");
        translations.insert(language.to_string(), Value::Object(source.clone()));
        report.record_source_fallback(language);
    } else {
        tracing::debug!(language = %language, "translation missing and fallbacks disabled");
        translations.remove(language);
    }
}

/// What: Fill each missing path of one translation document.
///
/// Inputs:
/// - `document`: Translation document to complete in place
/// - `source`: Source document
/// - `base_document`: Raw base-language document for regional tags
///
/// Output:
/// - Every missing path that was detected, including ones no fallback could fill
fn fill_missing_keys(
    document: &mut Document,
    source: &Document,
    base_document: Option<&Document>,
) -> Vec<String> {
    let missing = find_missing_keys(source, document);
    for path in &missing {
        let replacement = base_document
            .and_then(|base| get_path(base, path))
            .or_else(|| get_path(source, path));
        if let Some(value) = replacement {
            set_path(document, path, value.clone());
        }
    }
    missing
}
