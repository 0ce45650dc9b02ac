//! Regional language tag handling (e.g., `pt-BR` -> `pt`).

use std::collections::BTreeMap;

/// Regional language tag -> base language tag.
pub type RegionalMap = BTreeMap<String, String>;

/// Output of `resolve_targets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTargets {
    /// Tags to send to the translation service, in request order, without duplicates.
    pub processed_targets: Vec<String>,
    /// Regional tags that may borrow their base language's translation.
    pub regional_map: RegionalMap,
}

/// What: Extract the base subtag of a region-qualified language tag.
///
/// Inputs:
/// - `tag`: Language tag (e.g., "pt-BR", "de")
///
/// Output:
/// - `Some(base)` for tags with a hyphen and a non-empty base, `None` otherwise
///
/// Details:
/// - Splits on the first hyphen only, so "zh-Hant-TW" has base "zh"
#[must_use]
pub fn base_language(tag: &str) -> Option<&str> {
    tag.split_once('-')
        .map(|(base, _)| base)
        .filter(|base| !base.is_empty())
}

/// What: Compute the language list to request and the regional fallback map.
///
/// Inputs:
/// - `target_languages`: Tags requested by the caller, in order
/// - `regional_fallback`: Whether regional tags may fall back to their base language
///
/// Output:
/// - `ResolvedTargets` with the deduplicated request list and regional map
///
/// Details:
/// - For each regional tag (when enabled) the base is recorded in the map and
///   inserted just before the tag, unless the caller already asked for the base
///   explicitly or it was already inserted
/// - Every original tag is kept once, deduplicated by exact tag
#[must_use]
pub fn resolve_targets(target_languages: &[String], regional_fallback: bool) -> ResolvedTargets {
    let mut resolved = ResolvedTargets::default();

    for tag in target_languages {
        if regional_fallback && let Some(base) = base_language(tag) {
            resolved
                .regional_map
                .insert(tag.clone(), base.to_string());
            let requested_explicitly = target_languages.iter().any(|t| t == base);
            if !requested_explicitly && !resolved.processed_targets.iter().any(|t| t == base) {
                tracing::debug!(
                    tag = %tag,
                    base = %base,
                    "adding base language for regional fallback"
                );
                resolved.processed_targets.push(base.to_string());
            }
        }

        if !resolved.processed_targets.contains(tag) {
            resolved.processed_targets.push(tag.clone());
        }
    }

    resolved
}
