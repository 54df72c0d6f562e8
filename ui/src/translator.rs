//! Page translation session.
//!
//! A [`Translator`] owns everything one page load needs: the config, the
//! resolved language and the loaded dictionary. It is built once per load
//! and passed to whatever translates the document.
//!
//! Text lookup for `data-i18n="<key>"`, first non-empty wins:
//! 1. `dict[page][key]`
//! 2. `dict["common"][key]`
//! 3. the key itself
//!
//! Placeholders (`data-i18n-placeholder`) only consult the page section before
//! falling back to the key.

use crate::core::config::TranslatorConfig;
use crate::core::storage::PreferenceStore;
use crate::dom::{ElementKind, PageDocument, PageElement, PLACEHOLDER_MARKER, TEXT_MARKER};
use crate::i18n::{self, Dictionary, DictionarySource, LanguageCode, LocaleFetcher};

#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslatorConfig,
    language: LanguageCode,
    dictionary: Dictionary,
    source: DictionarySource,
}

impl Translator {
    pub fn new(config: TranslatorConfig, language: LanguageCode, dictionary: Dictionary) -> Self {
        Self {
            config,
            language,
            dictionary,
            source: DictionarySource::Requested,
        }
    }

    /// Resolve the language from `store` and load its dictionary.
    pub async fn initialize<S, F>(config: TranslatorConfig, store: &S, fetcher: &F) -> Self
    where
        S: PreferenceStore + ?Sized,
        F: LocaleFetcher,
    {
        let language = i18n::resolve_language(store, &config);
        let loaded = i18n::load_translations(fetcher, &config, &language).await;
        log::info!("[i18n] Active language {language} ({:?} dictionary)", loaded.source);
        Self {
            config,
            language,
            dictionary: loaded.dictionary,
            source: loaded.source,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// The language the user asked for; the dictionary may be a fallback.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn source(&self) -> DictionarySource {
        self.source
    }

    /// Display text for a `data-i18n` key on a page of `section`.
    pub fn text<'a>(&'a self, section: &str, key: &'a str) -> &'a str {
        self.dictionary
            .lookup_text(section, &self.config.common_section, key)
            .unwrap_or(key)
    }

    /// Display text for a `data-i18n-placeholder` key on a page of `section`.
    pub fn placeholder<'a>(&'a self, section: &str, key: &'a str) -> &'a str {
        self.dictionary.lookup_placeholder(section, key).unwrap_or(key)
    }

    /// Rewrite every marked element of `document` for `section`.
    pub fn translate_page<D: PageDocument>(&self, document: &D, section: &str) {
        self.apply(document.marked(TEXT_MARKER), document.marked(PLACEHOLDER_MARKER), section);
    }

    /// Rewrite only the marked descendants of the element with id `root_id`.
    pub fn translate_within<D: PageDocument>(&self, document: &D, root_id: &str, section: &str) {
        self.apply(
            document.marked_within(root_id, TEXT_MARKER),
            document.marked_within(root_id, PLACEHOLDER_MARKER),
            section,
        );
    }

    fn apply<E: PageElement>(&self, texts: Vec<E>, placeholders: Vec<E>, section: &str) {
        for element in texts {
            let Some(key) = element.attribute(TEXT_MARKER).filter(|key| !key.is_empty()) else {
                continue;
            };
            let text = self.text(section, &key);
            match element.kind() {
                ElementKind::ButtonInput => element.set_value(text),
                ElementKind::Title | ElementKind::Other => element.set_text(text),
            }
        }

        for element in placeholders {
            let Some(key) = element.attribute(PLACEHOLDER_MARKER).filter(|key| !key.is_empty()) else {
                continue;
            };
            element.set_placeholder(self.placeholder(section, &key));
        }
    }
}
