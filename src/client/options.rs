//! Per-call options for JSON and text translation.

use crate::fallback::FallbackPolicy;

/// Options for `TranslationClient::translate_json`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct JsonTranslateOptions {
    /// Language the source document is written in.
    pub source_language: String,
    /// Languages to translate into, in caller order.
    pub target_languages: Vec<String>,
    /// Keep `{placeholders}` untouched in translated strings.
    pub preserve_placeholders: bool,
    /// Ask the service to generate plural forms.
    pub enable_pluralization: bool,
    /// Namespace to tag the content with.
    pub namespace: Option<String>,
    /// Group output by detected namespace.
    pub group_by_namespace: bool,
    /// Export one document per namespace.
    pub export_per_namespace: bool,
    /// Fill absent languages and keys from the source document.
    pub fallback_to_source: bool,
    /// Let regional tags borrow their base language's translation.
    pub regional_fallback: bool,
    /// Requested last-resort language (see `FallbackPolicy::fallback_language`).
    pub fallback_language: Option<String>,
}

impl Default for JsonTranslateOptions {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_languages: Vec::new(),
            preserve_placeholders: true,
            enable_pluralization: false,
            namespace: None,
            group_by_namespace: false,
            export_per_namespace: false,
            fallback_to_source: true,
            regional_fallback: true,
            fallback_language: None,
        }
    }
}

impl JsonTranslateOptions {
    /// What: Options with defaults for the given target languages.
    #[must_use]
    pub fn new<I, S>(target_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_languages: target_languages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// What: Set the source language.
    #[must_use]
    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    /// What: Extract the fallback switches used by reconciliation.
    #[must_use]
    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy {
            source_language: self.source_language.clone(),
            fallback_to_source: self.fallback_to_source,
            regional_fallback: self.regional_fallback,
            fallback_language: self.fallback_language.clone(),
        }
    }
}

/// Options for `TranslationClient::translate_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTranslateOptions {
    /// Language of the input lines.
    pub source_language: String,
    /// Languages to translate into.
    pub target_languages: Vec<String>,
    /// Keep `{placeholders}` untouched in translated strings.
    pub preserve_placeholders: bool,
}

impl Default for TextTranslateOptions {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_languages: Vec::new(),
            preserve_placeholders: true,
        }
    }
}

impl TextTranslateOptions {
    /// What: Options with defaults for the given target languages.
    #[must_use]
    pub fn new<I, S>(target_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target_languages: target_languages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults_enable_both_fallbacks() {
        let options = JsonTranslateOptions::new(["es", "pt-BR"]);
        assert_eq!(options.target_languages, vec!["es", "pt-BR"]);
        assert_eq!(options.source_language, "en");
        assert!(options.preserve_placeholders);
        assert!(!options.enable_pluralization);

        let policy = options.fallback_policy();
        assert!(policy.fallback_to_source);
        assert!(policy.regional_fallback);
        assert_eq!(policy.fallback_language, None);
    }
}
