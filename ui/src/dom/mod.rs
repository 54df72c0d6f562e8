//! The slice of the DOM the translator reads and writes.
//!
//! [`PageDocument`] / [`PageElement`] keep the translation logic independent of
//! `web-sys`, so the same code runs against the browser document on wasm
//! (`dom::web`) and against [`memory::MemoryDocument`] in native tests.

use std::rc::Rc;

use thiserror::Error;

use crate::i18n::LanguageCode;
use crate::switcher::SwitcherWidget;

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Marker attribute naming the entry that fills an element's text.
pub const TEXT_MARKER: &str = "data-i18n";
/// Marker attribute naming the entry that fills an element's placeholder.
pub const PLACEHOLDER_MARKER: &str = "data-i18n-placeholder";
/// Body attribute holding the page's section key.
pub const PAGE_ATTRIBUTE: &str = "data-page";

/// How translated text is applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `<input type="submit">` / `<input type="button">`: the value carries the label.
    ButtonInput,
    /// `<title>`.
    Title,
    Other,
}

impl ElementKind {
    pub fn classify(tag: &str, input_type: Option<&str>) -> Self {
        if tag.eq_ignore_ascii_case("input")
            && input_type.is_some_and(|t| t.eq_ignore_ascii_case("submit") || t.eq_ignore_ascii_case("button"))
        {
            Self::ButtonInput
        } else if tag.eq_ignore_ascii_case("title") {
            Self::Title
        } else {
            Self::Other
        }
    }
}

pub trait PageElement {
    fn attribute(&self, name: &str) -> Option<String>;
    fn kind(&self) -> ElementKind;
    fn set_value(&self, text: &str);
    fn set_text(&self, text: &str);
    fn set_placeholder(&self, text: &str);
}

/// Invoked with the chosen code when a switcher link is activated.
pub type SelectHandler = Rc<dyn Fn(&LanguageCode)>;

pub trait PageDocument {
    type Element: PageElement;

    /// Elements carrying `attribute`, in document order.
    fn marked(&self, attribute: &str) -> Vec<Self::Element>;

    /// Descendants of the element with id `root_id` carrying `attribute`,
    /// in document order. Empty when there is no such element.
    fn marked_within(&self, root_id: &str, attribute: &str) -> Vec<Self::Element>;

    /// Non-empty `data-page` value of the body, if any.
    fn page_section(&self) -> Option<String>;

    fn has_element_id(&self, id: &str) -> bool;

    /// Append the switcher to the body and wire each link to `on_select`.
    fn mount_switcher(&self, widget: &SwitcherWidget, on_select: SelectHandler) -> Result<(), DomError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("document has no body")]
    NoBody,

    #[error("DOM call failed: {0}")]
    Js(String),
}
