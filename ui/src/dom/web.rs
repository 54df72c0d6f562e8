//! Browser document backend (`web-sys`).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, NodeList};

use super::{DomError, ElementKind, PageDocument, PageElement, SelectHandler, PAGE_ATTRIBUTE, TEXT_MARKER};
use crate::switcher::{SwitcherWidget, SEPARATOR};

fn js_error(err: JsValue) -> DomError {
    DomError::Js(format!("{err:?}"))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<WebElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(WebElement)
        .collect()
}

#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// `window.document`, if running in a page.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn create(&self, tag: &str) -> Result<Element, DomError> {
        self.document.create_element(tag).map_err(js_error)
    }
}

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl PageElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn kind(&self) -> ElementKind {
        let input_type = self.0.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::type_);
        ElementKind::classify(&self.0.tag_name(), input_type.as_deref())
    }

    fn set_value(&self, text: &str) {
        match self.0.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(text),
            None => {
                if let Err(err) = self.0.set_attribute("value", text) {
                    log::warn!("[i18n] Could not set value: {err:?}");
                }
            }
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_placeholder(&self, text: &str) {
        if let Err(err) = self.0.set_attribute("placeholder", text) {
            log::warn!("[i18n] Could not set placeholder: {err:?}");
        }
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn marked(&self, attribute: &str) -> Vec<WebElement> {
        elements(self.document.query_selector_all(&format!("[{attribute}]")))
    }

    fn marked_within(&self, root_id: &str, attribute: &str) -> Vec<WebElement> {
        let Some(root) = self.document.get_element_by_id(root_id) else {
            return Vec::new();
        };
        elements(root.query_selector_all(&format!("[{attribute}]")))
    }

    fn page_section(&self) -> Option<String> {
        self.document
            .body()?
            .get_attribute(PAGE_ATTRIBUTE)
            .filter(|section| !section.is_empty())
    }

    fn has_element_id(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn mount_switcher(&self, widget: &SwitcherWidget, on_select: SelectHandler) -> Result<(), DomError> {
        let body = self.document.body().ok_or(DomError::NoBody)?;

        let container = self.create("div")?;
        container.set_id(&widget.id);
        if let Some(html) = container.dyn_ref::<HtmlElement>() {
            let style = html.style();
            for (name, value) in &widget.style {
                style.set_property(name, value).map_err(js_error)?;
            }
        }

        let label = self.create("span")?;
        label.set_attribute(TEXT_MARKER, &widget.label_key).map_err(js_error)?;
        container.append_child(&label).map_err(js_error)?;

        for (position, link) in widget.links.iter().enumerate() {
            if position > 0 {
                container
                    .insert_adjacent_text("beforeend", SEPARATOR)
                    .map_err(js_error)?;
            }

            let anchor = self.create("a")?;
            anchor.set_attribute("href", "#").map_err(js_error)?;
            anchor
                .set_attribute("data-lang", link.code.as_str())
                .map_err(js_error)?;
            anchor.set_text_content(Some(&link.label));
            if let Some(html) = anchor.dyn_ref::<HtmlElement>() {
                let style = html.style();
                for (name, value) in link.style() {
                    style.set_property(name, &value).map_err(js_error)?;
                }
            }

            let handler = SelectHandler::clone(&on_select);
            let code = link.code.clone();
            let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                handler(&code);
            });
            anchor
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(js_error)?;
            // Listener lives as long as the page; the page reloads on use.
            on_click.forget();

            container.append_child(&anchor).map_err(js_error)?;
        }

        body.append_child(&container).map_err(js_error)?;
        Ok(())
    }
}
