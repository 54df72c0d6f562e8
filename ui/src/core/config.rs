//! Translator configuration.
//!
//! Every field has a default matching the deployed page, so an empty JSON
//! object (or no override at all) yields the stock behaviour:
//!
//! ```text
//! storage key      selectedLang
//! initial language zh
//! fallback         en
//! locales          /locales/{lang}.json?_t={millis}
//! switcher id      lang-switcher
//! ```
//!
//! Pages may override any subset through a JSON document (see
//! `TranslatorConfig::from_json`).

use serde::Deserialize;

/// One entry in the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageOption {
    /// Language code used for storage and the locale URL.
    pub code: String,
    /// Label shown in the switcher (in the language itself).
    pub label: String,
    /// Link colour when this language is active.
    pub accent: String,
}

impl LanguageOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            accent: accent.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Local storage key holding the persisted language choice.
    pub storage_key: String,
    /// Language used when nothing is persisted.
    pub initial_language: String,
    /// Language the loader falls back to (once) when a dictionary fails to load.
    pub fallback_language: String,
    /// URL prefix of the locale resources, without trailing slash.
    pub locales_path: String,
    /// Query parameter carrying the cache-busting timestamp.
    pub cache_bust_param: String,
    /// Section consulted after the page section.
    pub common_section: String,
    /// Reserved element id of the switcher widget.
    pub switcher_id: String,
    /// Marker key of the switcher's label.
    pub switcher_label_key: String,
    pub languages: Vec<LanguageOption>,
    /// Colour of the links for inactive languages.
    pub inactive_color: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            storage_key: "selectedLang".into(),
            initial_language: "zh".into(),
            fallback_language: "en".into(),
            locales_path: "/locales".into(),
            cache_bust_param: "_t".into(),
            common_section: "common".into(),
            switcher_id: "lang-switcher".into(),
            switcher_label_key: "common.language".into(),
            languages: vec![
                LanguageOption::new("zh", "中文", "#4CAF50"),
                LanguageOption::new("en", "English", "#2196F3"),
            ],
            inactive_color: "#ccc".into(),
        }
    }
}

impl TranslatorConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    /// Locale resource URL for `code`, stamped with `millis` to defeat caches.
    pub fn locale_url(&self, code: &str, millis: u64) -> String {
        format!(
            "{}/{code}.json?{}={millis}",
            self.locales_path.trim_end_matches('/'),
            self.cache_bust_param
        )
    }
}
