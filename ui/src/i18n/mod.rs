//! Locale dictionaries: language codes, parsing, and loading.
//!
//! - `language` – [`LanguageCode`] and the persisted-preference resolver.
//! - `dictionary` – section-keyed [`Dictionary`] with the lookup chains used
//!   by the page translator.
//! - `loader` – [`load_translations`] (fetch with a single fallback) and the
//!   [`LocaleFetcher`] seam, with a browser implementation on wasm and an
//!   in-memory one ([`StaticLocales`]) everywhere.

mod dictionary;
mod error;
mod language;
mod loader;

pub use dictionary::Dictionary;
pub use error::LoadError;
pub use language::{resolve_language, LanguageCode};
pub use loader::{load_translations, DictionarySource, LoadedDictionary, LocaleFetcher, LocaleResponse, StaticLocales};

#[cfg(target_arch = "wasm32")]
pub use loader::WebFetcher;
