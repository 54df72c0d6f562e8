//! Page-load sequence.

use std::rc::Rc;

use crate::core::config::TranslatorConfig;
use crate::core::platform::PageReloader;
use crate::core::storage::PreferenceStore;
use crate::dom::PageDocument;
use crate::i18n::LocaleFetcher;
use crate::switcher;
use crate::translator::Translator;

/// Resolve the language, load its dictionary, translate the page section
/// named by `<body data-page>`, then add the language switcher.
///
/// Runs once per page load; a language switch reloads the page instead of
/// calling this again.
pub async fn boot<D, S, F, R>(
    config: TranslatorConfig,
    document: &D,
    store: Rc<S>,
    fetcher: &F,
    reloader: Rc<R>,
) -> Translator
where
    D: PageDocument,
    S: PreferenceStore + 'static,
    F: LocaleFetcher,
    R: PageReloader + 'static,
{
    let translator = Translator::initialize(config, &*store, fetcher).await;

    if let Some(section) = document.page_section() {
        translator.translate_page(document, &section);
    }

    let on_select = switcher::selection_handler(store, reloader, translator.config().storage_key.clone());
    if let Err(err) = switcher::render_switcher(document, &translator, on_select) {
        log::warn!("[i18n] Language switcher not mounted: {err}");
    }

    translator
}
