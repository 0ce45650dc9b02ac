//! Record of every fallback substitution applied during one reconciliation pass.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Summary of the fallbacks applied to a translation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackReport {
    /// `true` iff any fallback of any kind was applied.
    pub used: bool,
    /// Languages whose entire translation was replaced by source content.
    pub languages_fallback_to_source: BTreeSet<String>,
    /// Regional tag -> base tag it was filled from.
    pub regional_fallbacks: BTreeMap<String, String>,
    /// Language tag -> dot-paths that were missing and filled from a fallback.
    pub keys_fallback: BTreeMap<String, Vec<String>>,
}

impl FallbackReport {
    /// What: Record that `language` was replaced wholesale by the source document.
    pub fn record_source_fallback(&mut self, language: &str) {
        self.used = true;
        self.languages_fallback_to_source.insert(language.to_string());
    }

    /// What: Record that `language` was copied from its base language `base`.
    pub fn record_regional_fallback(&mut self, language: &str, base: &str) {
        self.used = true;
        self.regional_fallbacks
            .insert(language.to_string(), base.to_string());
    }

    /// What: Record the missing paths detected for `language`.
    ///
    /// Details:
    /// - An empty list is ignored and does not mark the report as used
    pub fn record_missing_keys(&mut self, language: &str, paths: Vec<String>) {
        if paths.is_empty() {
            return;
        }
        self.used = true;
        self.keys_fallback.insert(language.to_string(), paths);
    }

    /// What: Convert into the optional form attached to results.
    ///
    /// Output:
    /// - `Some(self)` when any fallback was used, `None` otherwise
    #[must_use]
    pub fn into_used(self) -> Option<Self> {
        self.used.then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: An untouched report collapses to `None`.
    fn unused_report_is_omitted() {
        let mut report = FallbackReport::default();
        report.record_missing_keys("fr", Vec::new());
        assert_eq!(report.into_used(), None);
    }

    #[test]
    /// What: Each recording kind marks the report as used and serializes in camelCase.
    fn recorded_report_serializes_camel_case() {
        let mut report = FallbackReport::default();
        report.record_source_fallback("de");
        report.record_regional_fallback("pt-BR", "pt");
        report.record_missing_keys("fr", vec!["farewell".to_string()]);

        let report = report.into_used().expect("report should be used");
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["used"], serde_json::json!(true));
        assert_eq!(value["languagesFallbackToSource"], serde_json::json!(["de"]));
        assert_eq!(value["regionalFallbacks"]["pt-BR"], serde_json::json!("pt"));
        assert_eq!(value["keysFallback"]["fr"], serde_json::json!(["farewell"]));
    }
}
