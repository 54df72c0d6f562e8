//! Client-side page translation for the generator's static pages.
//!
//! Marked elements (`data-i18n`, `data-i18n-placeholder`) are filled from a
//! per-language JSON dictionary fetched from `/locales/{lang}.json`, and a
//! small overlay lets the visitor pick another language (persisted in local
//! storage, applied by reloading the page).
//!
//! The logic is platform-neutral; the browser backends (`web-sys`) are only
//! compiled for `wasm32`, while native builds use the in-memory document,
//! store and fetcher, which is what the test-suite drives.

pub mod boot;
pub mod core;
pub mod dom;
pub mod i18n;
pub mod switcher;
pub mod translator;

pub use boot::boot;
pub use translator::Translator;
