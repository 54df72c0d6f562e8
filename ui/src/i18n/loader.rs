//! Locale dictionary loading with a single level of fallback.
//!
//! `load_translations` never fails. The requested language is tried first;
//! if that fails the fallback language is tried once, and if that fails too
//! (or the requested language *was* the fallback) the result is an empty
//! dictionary, which makes every marker display its own key.
//!
//! Every request carries a `?_t=<millis>` stamp so neither the browser nor an
//! intermediate cache serves yesterday's dictionary.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::config::TranslatorConfig;
use crate::core::timing;
use crate::i18n::{Dictionary, LanguageCode, LoadError};

/// Raw answer to a locale request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResponse {
    pub status: u16,
    pub body: String,
}

impl LocaleResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Response from a transport that may not yield a text body. A missing
    /// body is kept as empty text, which fails to parse later.
    pub fn from_parts(status: u16, body: Option<String>) -> Self {
        Self {
            status,
            body: body.unwrap_or_default(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Dictionary carried by a response to `url`: non-2xx answers and bodies
    /// that are not a JSON object of sections are errors.
    pub fn into_dictionary(self, url: String) -> Result<Dictionary, LoadError> {
        if !self.is_success() {
            return Err(LoadError::Status {
                url,
                status: self.status,
            });
        }
        Dictionary::from_json(&self.body)
    }
}

/// Performs the HTTP GET for a locale resource.
///
/// Futures are polled on the UI thread, hence no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait LocaleFetcher {
    async fn fetch(&self, url: &str) -> Result<LocaleResponse, LoadError>;
}

/// Where the loaded dictionary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySource {
    Requested,
    Fallback,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDictionary {
    pub dictionary: Dictionary,
    pub source: DictionarySource,
}

/// Load the dictionary for `lang`, falling back at most once.
pub async fn load_translations<F: LocaleFetcher>(
    fetcher: &F,
    config: &TranslatorConfig,
    lang: &LanguageCode,
) -> LoadedDictionary {
    let fallback = LanguageCode::new(config.fallback_language.as_str());

    match fetch_dictionary(fetcher, config, lang).await {
        Ok(dictionary) => {
            log::debug!("[i18n] Loaded {lang} dictionary");
            return LoadedDictionary {
                dictionary,
                source: DictionarySource::Requested,
            };
        }
        Err(err) => log::warn!("[i18n] Fallback to {fallback} for {lang}: {err}"),
    }

    if *lang != fallback {
        match fetch_dictionary(fetcher, config, &fallback).await {
            Ok(dictionary) => {
                return LoadedDictionary {
                    dictionary,
                    source: DictionarySource::Fallback,
                }
            }
            Err(err) => log::warn!("[i18n] Fallback language {fallback} failed too: {err}"),
        }
    }

    LoadedDictionary {
        dictionary: Dictionary::default(),
        source: DictionarySource::Empty,
    }
}

async fn fetch_dictionary<F: LocaleFetcher>(
    fetcher: &F,
    config: &TranslatorConfig,
    lang: &LanguageCode,
) -> Result<Dictionary, LoadError> {
    lang.validate()?;
    let url = config.locale_url(lang.as_str(), timing::now_millis());
    let response = fetcher.fetch(&url).await?;
    response.into_dictionary(url)
}

/// Serves locale bodies from memory, keyed by language code, and records every
/// URL it was asked for. Unknown languages answer 404.
#[derive(Debug, Default)]
pub struct StaticLocales {
    bodies: HashMap<String, LocaleResponse>,
    requests: RefCell<Vec<String>>,
}

impl StaticLocales {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, code: &str, body: &str) -> Self {
        self.bodies.insert(code.to_string(), LocaleResponse::ok(body));
        self
    }

    pub fn with_response(mut self, code: &str, response: LocaleResponse) -> Self {
        self.bodies.insert(code.to_string(), response);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn code_from_url(url: &str) -> Option<&str> {
        let path = url.split('?').next()?;
        path.rsplit('/').next()?.strip_suffix(".json")
    }
}

impl LocaleFetcher for StaticLocales {
    async fn fetch(&self, url: &str) -> Result<LocaleResponse, LoadError> {
        self.requests.borrow_mut().push(url.to_string());
        let response = Self::code_from_url(url).and_then(|code| self.bodies.get(code));
        Ok(response.cloned().unwrap_or(LocaleResponse {
            status: 404,
            body: "Not Found".into(),
        }))
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebFetcher;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::{LocaleFetcher, LocaleResponse};
    use crate::i18n::LoadError;

    /// `window.fetch` based fetcher.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WebFetcher;

    impl LocaleFetcher for WebFetcher {
        async fn fetch(&self, url: &str) -> Result<LocaleResponse, LoadError> {
            let fail = |reason: String| LoadError::Fetch {
                url: url.to_string(),
                reason,
            };

            let window = web_sys::window().ok_or_else(|| fail("no window".into()))?;
            let value = JsFuture::from(window.fetch_with_str(url))
                .await
                .map_err(|err| fail(format!("{err:?}")))?;
            let response: web_sys::Response = value
                .dyn_into()
                .map_err(|_| fail("fetch did not yield a Response".into()))?;

            let status = response.status();
            let text = response.text().map_err(|err| fail(format!("{err:?}")))?;
            let body = JsFuture::from(text)
                .await
                .map_err(|err| fail(format!("{err:?}")))?
                .as_string();

            Ok(LocaleResponse::from_parts(status, body))
        }
    }
}
