//! In-memory document used by native builds and tests.
//!
//! Nodes live in a flat arena in document order; elements handed out by
//! [`MemoryDocument::marked`] are index handles into that arena, so writes
//! through them are visible to every clone of the document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{DomError, ElementKind, PageDocument, PageElement, SelectHandler, PAGE_ATTRIBUTE, TEXT_MARKER};
use crate::i18n::LanguageCode;
use crate::switcher::{SwitcherWidget, SEPARATOR};

/// Tag used for bare text nodes (switcher separators).
pub const TEXT_NODE: &str = "#text";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNode {
    /// Lower-case tag name.
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    /// The `value` property (what a button input displays).
    pub value: String,
    pub style: Vec<(String, String)>,
    pub parent: Option<usize>,
}

impl MemoryNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct DocumentState {
    body: BTreeMap<String, String>,
    nodes: Vec<MemoryNode>,
    handlers: Vec<(LanguageCode, SelectHandler)>,
}

#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryDocument")
            .field("body", &state.body)
            .field("nodes", &state.nodes)
            .field("handlers", &state.handlers.len())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `<body data-page="...">`.
    pub fn with_page(self, section: &str) -> Self {
        self.state
            .borrow_mut()
            .body
            .insert(PAGE_ATTRIBUTE.to_string(), section.to_string());
        self
    }

    /// Append an element under the body and return its index.
    pub fn add(&self, tag: &str, attributes: &[(&str, &str)]) -> usize {
        self.push(MemoryNode {
            tag: tag.to_ascii_lowercase(),
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            ..MemoryNode::default()
        })
    }

    /// Append an element with initial text content.
    pub fn add_with_text(&self, tag: &str, attributes: &[(&str, &str)], text: &str) -> usize {
        let index = self.add(tag, attributes);
        self.state.borrow_mut().nodes[index].text = text.to_string();
        index
    }

    pub fn node(&self, index: usize) -> MemoryNode {
        self.state.borrow().nodes[index].clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices of every node with `id`.
    pub fn find_by_id(&self, id: &str) -> Vec<usize> {
        self.find(|node| node.attribute("id") == Some(id))
    }

    /// Indices of the direct children of `parent`.
    pub fn children(&self, parent: usize) -> Vec<usize> {
        self.find(|node| node.parent == Some(parent))
    }

    /// Simulate activating the switcher link for `code`.
    /// Returns `false` when no such link is mounted.
    pub fn click_language(&self, code: &str) -> bool {
        let handler = self
            .state
            .borrow()
            .handlers
            .iter()
            .find(|(lang, _)| *lang == code)
            .map(|(_, handler)| Rc::clone(handler));

        match handler {
            Some(handler) => {
                handler(&LanguageCode::new(code));
                true
            }
            None => false,
        }
    }

    fn find(&self, predicate: impl Fn(&MemoryNode) -> bool) -> Vec<usize> {
        self.state
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| predicate(*node))
            .map(|(index, _)| index)
            .collect()
    }

    fn push(&self, node: MemoryNode) -> usize {
        let mut state = self.state.borrow_mut();
        state.nodes.push(node);
        state.nodes.len() - 1
    }

    fn push_child(&self, parent: usize, tag: &str, text: &str) -> usize {
        self.push(MemoryNode {
            tag: tag.to_string(),
            text: text.to_string(),
            parent: Some(parent),
            ..MemoryNode::default()
        })
    }

    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let state = self.state.borrow();
        let mut current = state.nodes[index].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = state.nodes[parent].parent;
        }
        false
    }

    fn update(&self, index: usize, f: impl FnOnce(&mut MemoryNode)) {
        f(&mut self.state.borrow_mut().nodes[index]);
    }
}

/// Handle to one node of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    document: MemoryDocument,
    index: usize,
}

impl MemoryElement {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl PageElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.document.node(self.index).attributes.get(name).cloned()
    }

    fn kind(&self) -> ElementKind {
        let node = self.document.node(self.index);
        ElementKind::classify(&node.tag, node.attribute("type"))
    }

    fn set_value(&self, text: &str) {
        self.document.update(self.index, |node| node.value = text.to_string());
    }

    fn set_text(&self, text: &str) {
        self.document.update(self.index, |node| node.text = text.to_string());
    }

    fn set_placeholder(&self, text: &str) {
        self.document.update(self.index, |node| {
            node.attributes.insert("placeholder".to_string(), text.to_string());
        });
    }
}

impl PageDocument for MemoryDocument {
    type Element = MemoryElement;

    fn marked(&self, attribute: &str) -> Vec<MemoryElement> {
        self.find(|node| node.attributes.contains_key(attribute))
            .into_iter()
            .map(|index| MemoryElement {
                document: self.clone(),
                index,
            })
            .collect()
    }

    fn marked_within(&self, root_id: &str, attribute: &str) -> Vec<MemoryElement> {
        let Some(root) = self.find_by_id(root_id).first().copied() else {
            return Vec::new();
        };
        self.marked(attribute)
            .into_iter()
            .filter(|element| self.is_descendant(element.index, root))
            .collect()
    }

    fn page_section(&self) -> Option<String> {
        self.state
            .borrow()
            .body
            .get(PAGE_ATTRIBUTE)
            .filter(|section| !section.is_empty())
            .cloned()
    }

    fn has_element_id(&self, id: &str) -> bool {
        !self.find_by_id(id).is_empty()
    }

    fn mount_switcher(&self, widget: &SwitcherWidget, on_select: SelectHandler) -> Result<(), DomError> {
        let container = self.add("div", &[("id", widget.id.as_str())]);
        self.update(container, |node| {
            node.style = widget
                .style
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
        });

        let label = self.push_child(container, "span", "");
        self.update(label, |node| {
            node.attributes
                .insert(TEXT_MARKER.to_string(), widget.label_key.clone());
        });

        for (position, link) in widget.links.iter().enumerate() {
            if position > 0 {
                self.push_child(container, TEXT_NODE, SEPARATOR);
            }
            let anchor = self.push_child(container, "a", &link.label);
            self.update(anchor, |node| {
                node.attributes.insert("href".to_string(), "#".to_string());
                node.attributes
                    .insert("data-lang".to_string(), link.code.to_string());
                node.style = link
                    .style()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value))
                    .collect();
            });
            self.state
                .borrow_mut()
                .handlers
                .push((link.code.clone(), Rc::clone(&on_select)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_returns_document_order() {
        let doc = MemoryDocument::new();
        let a = doc.add("h1", &[(TEXT_MARKER, "title")]);
        doc.add("p", &[]);
        let c = doc.add("p", &[(TEXT_MARKER, "intro")]);
        let found: Vec<usize> = doc.marked(TEXT_MARKER).iter().map(MemoryElement::index).collect();
        assert_eq!(found, vec![a, c]);
    }

    #[test]
    fn writes_through_handles_are_shared() {
        let doc = MemoryDocument::new();
        let index = doc.add("input", &[("type", "submit"), (TEXT_MARKER, "go")]);
        let element = doc.marked(TEXT_MARKER).remove(0);
        assert_eq!(element.kind(), ElementKind::ButtonInput);
        element.set_value("Go");
        element.set_placeholder("…");
        let node = doc.node(index);
        assert_eq!(node.value, "Go");
        assert_eq!(node.attribute("placeholder"), Some("…"));
    }

    #[test]
    fn empty_page_attribute_is_no_section() {
        assert_eq!(MemoryDocument::new().with_page("").page_section(), None);
        assert_eq!(MemoryDocument::new().with_page("home").page_section().as_deref(), Some("home"));
        assert_eq!(MemoryDocument::new().page_section(), None);
    }

    #[test]
    fn marked_within_only_sees_descendants() {
        let doc = MemoryDocument::new();
        doc.add("h1", &[(TEXT_MARKER, "heading")]);
        let root = doc.add("div", &[("id", "box"), (TEXT_MARKER, "box")]);
        let child = doc.push_child(root, "span", "");
        doc.update(child, |node| {
            node.attributes.insert(TEXT_MARKER.to_string(), "inner".to_string());
        });
        let grandchild = doc.push_child(child, "em", "");
        doc.update(grandchild, |node| {
            node.attributes.insert(TEXT_MARKER.to_string(), "deeper".to_string());
        });

        let found: Vec<usize> = doc
            .marked_within("box", TEXT_MARKER)
            .iter()
            .map(MemoryElement::index)
            .collect();
        assert_eq!(found, vec![child, grandchild]);
        assert!(doc.marked_within("missing", TEXT_MARKER).is_empty());
    }

    #[test]
    fn click_without_switcher_is_ignored() {
        assert!(!MemoryDocument::new().click_language("en"));
    }
}
