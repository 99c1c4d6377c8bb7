//! View adapters: the surface the i18n layer writes page text into.
//!
//! The applier and switcher never touch a rendering surface directly; they go
//! through [`ViewAdapter`]. The browser build uses [`DomView`] (the live
//! document), tests and headless callers use [`MemoryView`].

mod memory;
mod selector;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use memory::{MemoryView, NodeId};
pub use selector::{Selector, SelectorError};

#[cfg(target_arch = "wasm32")]
pub use dom::DomView;

/// Attribute naming the translation key of an element.
pub const I18N_ATTR: &str = "data-i18n";

/// Attribute naming the language a language-selection control activates.
pub const LANG_ATTR: &str = "data-lang";

/// Minimal capability set over a document-like tree.
///
/// Selectors use the CSS subset understood by [`Selector`]. Lookups of elements
/// that do not exist return `None`/empty rather than failing.
pub trait ViewAdapter {
    /// Cheap handle to one element.
    type Node: Clone;

    /// Language attribute of the document root (`<html lang>`).
    fn document_lang(&self) -> Option<String>;
    fn set_document_lang(&mut self, lang: &str);

    /// First element matching `selector`.
    fn select(&self, selector: &str) -> Option<Self::Node>;
    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Node>;

    fn text(&self, node: &Self::Node) -> Option<String>;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool);

    /// Elements carrying `attribute`, paired with its value.
    fn marked(&self, attribute: &str) -> Vec<(Self::Node, String)> {
        self.select_all(&format!("[{attribute}]"))
            .into_iter()
            .filter_map(|node| {
                let value = self.attribute(&node, attribute)?;
                Some((node, value))
            })
            .collect()
    }

    /// Elements opted into translation, with their translation key.
    fn translatable(&self) -> Vec<(Self::Node, String)> {
        self.marked(I18N_ATTR)
    }

    /// Language-selection controls, with the language code each activates.
    fn language_controls(&self) -> Vec<(Self::Node, String)> {
        self.marked(LANG_ATTR)
    }
}
