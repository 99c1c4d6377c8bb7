use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::ViewAdapter;

/// The live browser document.
#[derive(Debug, Clone)]
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }
}

impl ViewAdapter for DomView {
    type Node = Element;

    fn document_lang(&self) -> Option<String> {
        self.document.document_element()?.get_attribute("lang")
    }

    fn set_document_lang(&mut self, lang: &str) {
        if let Some(root) = self.document.document_element() {
            root.set_attribute("lang", lang).ok();
        }
    }

    fn select(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn select_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn text(&self, node: &Element) -> Option<String> {
        node.text_content()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        node.set_attribute(name, value).ok();
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) {
        let list = node.class_list();
        if on {
            list.add_1(class).ok();
        } else {
            list.remove_1(class).ok();
        }
    }
}
