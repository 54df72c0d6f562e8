//! Language codes and the active-language resolver.

use std::fmt;

use unic_langid::LanguageIdentifier;

use crate::core::config::TranslatorConfig;
use crate::core::storage::PreferenceStore;
use crate::i18n::LoadError;

/// A language code as stored and as used in locale URLs (`"en"`, `"zh"`, `"pt-BR"`).
///
/// Kept verbatim (no canonicalisation) so it matches the locale file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the code is a well-formed language identifier before it is
    /// spliced into a URL path.
    pub fn validate(&self) -> Result<LanguageIdentifier, LoadError> {
        if self.0.is_empty() || !self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(LoadError::InvalidLanguage(self.0.clone()));
        }
        self.0
            .parse::<LanguageIdentifier>()
            .map_err(|_| LoadError::InvalidLanguage(self.0.clone()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Persisted choice if there is one, otherwise the configured initial language.
pub fn resolve_language<S: PreferenceStore + ?Sized>(store: &S, config: &TranslatorConfig) -> LanguageCode {
    match store.get(&config.storage_key) {
        Some(stored) if !stored.trim().is_empty() => LanguageCode::new(stored.trim()),
        _ => LanguageCode::new(config.initial_language.as_str()),
    }
}
