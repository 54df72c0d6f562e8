//! Fixed-position language switcher overlay.
//!
//! The widget is described by [`SwitcherWidget`] (pure data, built from the
//! config and the active language) and mounted by the document backend. It is
//! created at most once per page: an element with the reserved id short
//! circuits [`render_switcher`].
//!
//! Choosing a language does not re-render anything in place. The choice is
//! persisted and the page reloads, which re-runs the whole boot sequence with
//! the new language.

use std::rc::Rc;

use crate::core::config::TranslatorConfig;
use crate::core::platform::PageReloader;
use crate::core::storage::PreferenceStore;
use crate::dom::{DomError, PageDocument, SelectHandler};
use crate::i18n::LanguageCode;
use crate::translator::Translator;

/// Text between two language links.
pub const SEPARATOR: &str = " | ";

/// Inline style of the overlay container.
pub const CONTAINER_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "10px"),
    ("right", "10px"),
    ("z-index", "1000"),
    ("background", "rgba(0,0,0,0.7)"),
    ("color", "white"),
    ("padding", "4px 8px"),
    ("border-radius", "4px"),
    ("font-size", "12px"),
    ("font-family", "Arial,sans-serif"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherLink {
    pub code: LanguageCode,
    pub label: String,
    pub color: String,
    pub active: bool,
}

impl SwitcherLink {
    pub fn style(&self) -> Vec<(&'static str, String)> {
        vec![("margin", "0 5px".to_string()), ("color", self.color.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherWidget {
    pub id: String,
    /// `data-i18n` key of the label preceding the links.
    pub label_key: String,
    pub links: Vec<SwitcherLink>,
    pub style: Vec<(&'static str, &'static str)>,
}

impl SwitcherWidget {
    pub fn build(config: &TranslatorConfig, active: &LanguageCode) -> Self {
        let links = config
            .languages
            .iter()
            .map(|option| {
                let is_active = *active == option.code.as_str();
                SwitcherLink {
                    code: LanguageCode::new(option.code.as_str()),
                    label: option.label.clone(),
                    color: if is_active {
                        option.accent.clone()
                    } else {
                        config.inactive_color.clone()
                    },
                    active: is_active,
                }
            })
            .collect();

        Self {
            id: config.switcher_id.clone(),
            label_key: config.switcher_label_key.clone(),
            links,
            style: CONTAINER_STYLE.to_vec(),
        }
    }
}

/// Mount the switcher unless one already exists, then translate its label
/// against the common section. The rest of the page is left alone.
///
/// Returns whether a switcher was created.
pub fn render_switcher<D: PageDocument>(
    document: &D,
    translator: &Translator,
    on_select: SelectHandler,
) -> Result<bool, DomError> {
    let config = translator.config();
    if document.has_element_id(&config.switcher_id) {
        return Ok(false);
    }

    let widget = SwitcherWidget::build(config, translator.language());
    document.mount_switcher(&widget, on_select)?;
    translator.translate_within(document, &config.switcher_id, &config.common_section);
    Ok(true)
}

/// Persist `code` and reload the page.
pub fn switch_language<S, R>(store: &S, reloader: &R, storage_key: &str, code: &LanguageCode)
where
    S: PreferenceStore + ?Sized,
    R: PageReloader + ?Sized,
{
    log::info!("[i18n] Switching language to {code}");
    store.set(storage_key, code.as_str());
    reloader.reload();
}

/// Handler wiring switcher links to [`switch_language`].
pub fn selection_handler<S, R>(store: Rc<S>, reloader: Rc<R>, storage_key: String) -> SelectHandler
where
    S: PreferenceStore + 'static,
    R: PageReloader + 'static,
{
    Rc::new(move |code: &LanguageCode| switch_language(&*store, &*reloader, &storage_key, code))
}
