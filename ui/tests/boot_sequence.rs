//! End-to-end page loads against the in-memory document.
//!
//! Each "page load" builds a fresh document and runs `ui::boot`, sharing only
//! the preference store between loads (like local storage across reloads).

use std::rc::Rc;

use futures::executor::block_on;
use ui::core::config::TranslatorConfig;
use ui::core::platform::RecordingReloader;
use ui::core::storage::{MemoryStore, PreferenceStore};
use ui::dom::memory::MemoryDocument;
use ui::dom::{PLACEHOLDER_MARKER, TEXT_MARKER};
use ui::i18n::{DictionarySource, StaticLocales};
use ui::Translator;

const EN: &str = r#"{
  "common": { "common.language": "Language:", "greeting": "Hi", "submit": "Submit" },
  "home": { "greeting": "Hello", "email": "Your e-mail", "tagline": "Build your own client" }
}"#;

const ZH: &str = r#"{
  "common": { "common.language": "语言：", "greeting": "嗨", "submit": "提交" },
  "home": { "greeting": "你好", "email": "电子邮箱", "tagline": "构建你自己的客户端" }
}"#;

struct Page {
    doc: MemoryDocument,
    greeting: usize,
    tagline: usize,
    submit: usize,
    email: usize,
    missing: usize,
}

fn home_page() -> Page {
    let doc = MemoryDocument::new().with_page("home");
    let greeting = doc.add("h1", &[(TEXT_MARKER, "greeting")]);
    let tagline = doc.add("p", &[(TEXT_MARKER, "tagline")]);
    let submit = doc.add("input", &[("type", "submit"), (TEXT_MARKER, "submit")]);
    let email = doc.add("input", &[("type", "email"), (PLACEHOLDER_MARKER, "email")]);
    let missing = doc.add("p", &[(TEXT_MARKER, "missing.key")]);
    Page {
        doc,
        greeting,
        tagline,
        submit,
        email,
        missing,
    }
}

fn load(page: &Page, store: &Rc<MemoryStore>, fetcher: &StaticLocales, reloader: &Rc<RecordingReloader>) -> Translator {
    block_on(ui::boot(
        TranslatorConfig::default(),
        &page.doc,
        Rc::clone(store),
        fetcher,
        Rc::clone(reloader),
    ))
}

fn locales() -> StaticLocales {
    StaticLocales::new().with_locale("en", EN).with_locale("zh", ZH)
}

#[test]
fn first_visit_uses_initial_language() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    let page = home_page();

    let translator = load(&page, &store, &locales(), &reloader);

    assert_eq!(translator.language().as_str(), "zh");
    assert_eq!(page.doc.node(page.greeting).text, "你好");
    assert_eq!(page.doc.node(page.submit).value, "提交");
    assert_eq!(page.doc.node(page.email).attribute("placeholder"), Some("电子邮箱"));
    assert_eq!(page.doc.node(page.missing).text, "missing.key");
    assert_eq!(reloader.reloads(), 0);
    assert_eq!(store.writes(), 0);
}

#[test]
fn page_section_text_survives_switcher_mount() {
    let store = Rc::new(MemoryStore::with_entry("selectedLang", "en"));
    let reloader = Rc::new(RecordingReloader::new());
    let page = home_page();

    load(&page, &store, &locales(), &reloader);

    // `tagline` only exists in the page section; `greeting` is in both.
    assert_eq!(page.doc.node(page.tagline).text, "Build your own client");
    assert_eq!(page.doc.node(page.greeting).text, "Hello");
    assert_eq!(page.doc.node(page.submit).value, "Submit");
}

#[test]
fn switching_language_persists_reloads_and_applies_on_next_load() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    let fetcher = locales();

    let first = home_page();
    load(&first, &store, &fetcher, &reloader);
    assert!(first.doc.click_language("en"));
    assert_eq!(store.get("selectedLang").as_deref(), Some("en"));
    assert_eq!(reloader.reloads(), 1);

    // The reload: a fresh document, same storage.
    let second = home_page();
    let translator = load(&second, &store, &fetcher, &reloader);
    assert_eq!(translator.language().as_str(), "en");
    assert_eq!(second.doc.node(second.greeting).text, "Hello");
    assert_eq!(second.doc.node(second.submit).value, "Submit");
    assert_eq!(reloader.reloads(), 1);
}

#[test]
fn switcher_highlights_active_language_and_translates_label() {
    let store = Rc::new(MemoryStore::with_entry("selectedLang", "en"));
    let reloader = Rc::new(RecordingReloader::new());
    let page = home_page();
    load(&page, &store, &locales(), &reloader);

    let ids = page.doc.find_by_id("lang-switcher");
    assert_eq!(ids.len(), 1);
    let children = page.doc.children(ids[0]);
    let label = page.doc.node(children[0]);
    assert_eq!(label.text, "Language:");

    let links: Vec<(String, Option<String>)> = children
        .iter()
        .map(|&index| page.doc.node(index))
        .filter(|node| node.tag == "a")
        .map(|node| (node.text.clone(), node.style("color").map(str::to_string)))
        .collect();
    assert_eq!(
        links,
        vec![
            ("中文".to_string(), Some("#ccc".to_string())),
            ("English".to_string(), Some("#2196F3".to_string())),
        ]
    );
}

#[test]
fn unknown_persisted_language_falls_back_once() {
    let store = Rc::new(MemoryStore::with_entry("selectedLang", "xx"));
    let reloader = Rc::new(RecordingReloader::new());
    let fetcher = locales();
    let page = home_page();

    let translator = load(&page, &store, &fetcher, &reloader);

    assert_eq!(translator.source(), DictionarySource::Fallback);
    assert_eq!(fetcher.requests().len(), 2);
    assert_eq!(page.doc.node(page.greeting).text, "Hello");
}

#[test]
fn unreachable_locales_show_keys() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    let fetcher = StaticLocales::new();
    let page = home_page();

    let translator = load(&page, &store, &fetcher, &reloader);

    assert_eq!(translator.source(), DictionarySource::Empty);
    assert_eq!(fetcher.requests().len(), 2);
    assert_eq!(page.doc.node(page.greeting).text, "greeting");
    assert_eq!(page.doc.node(page.submit).value, "submit");
    assert_eq!(page.doc.node(page.email).attribute("placeholder"), Some("email"));
    assert_eq!(page.doc.node(page.missing).text, "missing.key");

    let switcher = page.doc.find_by_id("lang-switcher")[0];
    let label = page.doc.node(page.doc.children(switcher)[0]);
    assert_eq!(label.text, "common.language");
}

#[test]
fn every_marked_element_displays_something() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    for fetcher in [locales(), StaticLocales::new(), StaticLocales::new().with_locale("en", "{}")] {
        let page = home_page();
        load(&page, &store, &fetcher, &reloader);
        for index in 0..page.doc.len() {
            let node = page.doc.node(index);
            if node.attribute(TEXT_MARKER).is_some() {
                let shown = if node.tag == "input" { &node.value } else { &node.text };
                assert!(!shown.is_empty(), "empty text for {node:?}");
            }
            if node.attribute(PLACEHOLDER_MARKER).is_some() {
                assert!(node.attribute("placeholder").is_some_and(|p| !p.is_empty()));
            }
        }
    }
}

#[test]
fn page_without_section_still_gets_switcher() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    let doc = MemoryDocument::new();
    let greeting = doc.add_with_text("h1", &[(TEXT_MARKER, "greeting")], "static");

    block_on(ui::boot(
        TranslatorConfig::default(),
        &doc,
        Rc::clone(&store),
        &locales(),
        Rc::clone(&reloader),
    ));

    // No body section: page elements keep their markup text, only the
    // switcher label is translated.
    assert_eq!(doc.node(greeting).text, "static");
    let switcher = doc.find_by_id("lang-switcher")[0];
    assert_eq!(doc.node(doc.children(switcher)[0]).text, "语言：");
    assert_eq!(doc.find_by_id("lang-switcher").len(), 1);
}

#[test]
fn existing_switcher_is_not_duplicated() {
    let store = Rc::new(MemoryStore::new());
    let reloader = Rc::new(RecordingReloader::new());
    let page = home_page();
    page.doc.add("div", &[("id", "lang-switcher")]);

    load(&page, &store, &locales(), &reloader);
    load(&page, &store, &locales(), &reloader);

    assert_eq!(page.doc.find_by_id("lang-switcher").len(), 1);
    assert!(!page.doc.click_language("en"));
}
