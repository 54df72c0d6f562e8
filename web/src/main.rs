//! Browser entry point: wait for the document, then run the translator once.

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("[i18n] logger already set: {err}").into());
    }
    web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("rdgen-i18n-web runs in the browser; build it for wasm32-unknown-unknown.");
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;

    use ui::core::config::TranslatorConfig;
    use ui::core::platform::{spawn_future, WindowReloader};
    use ui::core::storage::LocalStorage;
    use ui::dom::web::WebDocument;
    use ui::i18n::WebFetcher;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{AddEventListenerOptions, Document};

    /// Id of the optional `<script type="application/json">` config override.
    const CONFIG_ELEMENT_ID: &str = "i18n-config";

    pub fn start() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("[i18n] No document; translator not started");
            return;
        };

        if document.ready_state() != "loading" {
            run(document);
            return;
        }

        let ready = document.clone();
        let on_ready = Closure::once(move || run(ready));
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[i18n] Could not wait for DOMContentLoaded: {err:?}");
            return;
        }
        on_ready.forget();
    }

    fn run(document: Document) {
        let config = load_config(&document);
        let page = WebDocument::new(document);
        spawn_future(async move {
            ui::boot(
                config,
                &page,
                Rc::new(LocalStorage),
                &WebFetcher,
                Rc::new(WindowReloader),
            )
            .await;
        });
    }

    fn load_config(document: &Document) -> TranslatorConfig {
        let Some(src) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return TranslatorConfig::default();
        };

        TranslatorConfig::from_json(&src).unwrap_or_else(|err| {
            log::warn!("[i18n] Ignoring #{CONFIG_ELEMENT_ID}: {err}");
            TranslatorConfig::default()
        })
    }
}
