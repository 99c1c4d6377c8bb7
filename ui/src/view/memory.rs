use std::collections::BTreeMap;

use tracing::debug;

use super::selector::{Compound, Selector, SelectorError};
use super::ViewAdapter;

/// Handle to an element of a [`MemoryView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

/// In-memory element tree implementing [`ViewAdapter`].
///
/// Elements are append-only; document order is insertion order, so build
/// fixtures top to bottom the way the markup reads.
///
/// ```
/// use ui::view::{MemoryView, ViewAdapter};
///
/// let mut view = MemoryView::new();
/// let footer = view.insert(None, "footer.footer-logo", "").unwrap();
/// view.insert(Some(footer), "span.logo-text", "Software ECG").unwrap();
///
/// let logo = view.select(".footer-logo .logo-text").unwrap();
/// assert_eq!(view.text(&logo).as_deref(), Some("Software ECG"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    lang: Option<String>,
    elements: Vec<Element>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element described by a compound selector such as
    /// `h1.hero-title[data-i18n="hero.title"]`. The tag defaults to `div`.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        spec: &str,
        text: &str,
    ) -> Result<NodeId, SelectorError> {
        let selector = Selector::parse(spec)?;
        if selector.compounds.len() != 1 {
            return Err(SelectorError::Expected("a single compound selector"));
        }
        let compound = selector.subject();
        let id = NodeId(self.elements.len());
        self.elements.push(Element {
            tag: compound.tag.clone().unwrap_or_else(|| "div".to_string()),
            parent,
            classes: compound.classes.clone(),
            attributes: compound
                .attributes
                .iter()
                .map(|(name, value)| (name.clone(), value.clone().unwrap_or_default()))
                .collect(),
            text: text.to_string(),
        });
        Ok(id)
    }

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok((0..self.elements.len())
            .map(NodeId)
            .filter(|id| self.matches_selector(*id, &selector))
            .collect())
    }

    /// Text of the first element matching `selector`.
    pub fn text_of(&self, selector: &str) -> Option<String> {
        let node = self.select(selector)?;
        self.text(&node)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element(&self, node: &NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    fn element_mut(&mut self, node: &NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }

    fn matches(&self, id: NodeId, compound: &Compound) -> bool {
        let Some(el) = self.element(&id) else {
            return false;
        };
        if compound.tag.as_ref().is_some_and(|tag| *tag != el.tag) {
            return false;
        }
        if !compound.classes.iter().all(|c| el.classes.contains(c)) {
            return false;
        }
        compound
            .attributes
            .iter()
            .all(|(name, expected)| match (el.attributes.get(name), expected) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            })
    }

    fn matches_selector(&self, id: NodeId, selector: &Selector) -> bool {
        if !self.matches(id, selector.subject()) {
            return false;
        }
        let mut ancestor = self.element(&id).and_then(|el| el.parent);
        for compound in selector.ancestors().iter().rev() {
            loop {
                let Some(current) = ancestor else {
                    return false;
                };
                ancestor = self.element(&current).and_then(|el| el.parent);
                if self.matches(current, compound) {
                    break;
                }
            }
        }
        true
    }
}

impl ViewAdapter for MemoryView {
    type Node = NodeId;

    fn document_lang(&self) -> Option<String> {
        self.lang.clone()
    }

    fn set_document_lang(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }

    fn select(&self, selector: &str) -> Option<NodeId> {
        self.select_all(selector).into_iter().next()
    }

    fn select_all(&self, selector: &str) -> Vec<NodeId> {
        self.query(selector).unwrap_or_else(|err| {
            debug!(selector, "ignoring unsupported selector: {err}");
            Vec::new()
        })
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        self.element(node).map(|el| el.text.clone())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.to_string();
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let el = self.element(node)?;
        if name == "class" {
            return (!el.classes.is_empty()).then(|| el.classes.join(" "));
        }
        el.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let Some(el) = self.element_mut(node) else {
            return;
        };
        if name == "class" {
            el.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn set_class(&mut self, node: &NodeId, class: &str, on: bool) {
        let Some(el) = self.element_mut(node) else {
            return;
        };
        let present = el.classes.iter().any(|c| c == class);
        if on && !present {
            el.classes.push(class.to_string());
        } else if !on && present {
            el.classes.retain(|c| c != class);
        }
    }
}
