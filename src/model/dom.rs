//! Minimal host-content model the region engine operates on
//!
//! The engine never renders anything; it only needs elements with a kind, a
//! content string, a parent link, and a couple of presentation flags. Hosts
//! mirror their real document tree into this arena.

use std::collections::HashMap;

/// Identifies an element in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Role an element kind plays for the capability check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// Directly convertible into an editable surface
    PlainText,
    /// Needs adaptation: a sibling editable surface mirrors the widget value
    AdaptableWidget,
    /// Cannot be made editable; binding fails
    Unsupported,
}

/// Closed set of element kinds the engine recognizes.
///
/// Plain-text kinds form the fixed allow-list of directly convertible
/// elements; `TextWidget` is the container-based special case (a plain
/// text-input widget); the rest are representatives of the unsupported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Paragraph,
    Heading,
    Div,
    Span,
    Blockquote,
    Pre,
    ListItem,
    Article,
    Section,
    /// Plain text-input widget (adapted, not converted in place)
    TextWidget,
    Image,
    Table,
    Canvas,
    Form,
}

impl ElementKind {
    /// Capability check: which role this kind plays for conversion
    pub fn role(self) -> ElementRole {
        use ElementKind::*;
        match self {
            Paragraph | Heading | Div | Span | Blockquote | Pre | ListItem | Article
            | Section => ElementRole::PlainText,
            TextWidget => ElementRole::AdaptableWidget,
            Image | Table | Canvas | Form => ElementRole::Unsupported,
        }
    }
}

/// One element of the host document
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// HTML content string (empty for widgets; they carry `value` instead)
    pub content: String,
    /// Widget value, only meaningful for `ElementKind::TextWidget`
    pub value: String,
    /// Whether native content editing is enabled on this element
    pub editable: bool,
    /// Whether the element is hidden from presentation
    pub hidden: bool,
    pub parent: Option<ElementId>,
}

/// Arena of host elements with generated ids
#[derive(Debug, Default)]
pub struct Dom {
    elements: HashMap<ElementId, Element>,
    next_id: u64,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> ElementId {
        self.next_id += 1;
        ElementId(self.next_id)
    }

    /// Create an element with empty content
    pub fn create(&mut self, kind: ElementKind, parent: Option<ElementId>) -> ElementId {
        self.create_with_content(kind, parent, "")
    }

    /// Create an element with the given content string
    pub fn create_with_content(
        &mut self,
        kind: ElementKind,
        parent: Option<ElementId>,
        content: &str,
    ) -> ElementId {
        let id = self.alloc_id();
        self.elements.insert(
            id,
            Element {
                id,
                kind,
                content: content.to_string(),
                value: String::new(),
                editable: false,
                hidden: false,
                parent,
            },
        );
        id
    }

    /// Create a text widget carrying the given value
    pub fn create_widget(&mut self, parent: Option<ElementId>, value: &str) -> ElementId {
        let id = self.create(ElementKind::TextWidget, parent);
        if let Some(el) = self.elements.get_mut(&id) {
            el.value = value.to_string();
        }
        id
    }

    /// Create a sibling of `of` (same parent), returning the new element
    pub fn insert_sibling(&mut self, of: ElementId, kind: ElementKind) -> Option<ElementId> {
        let parent = self.elements.get(&of)?.parent;
        Some(self.create(kind, parent))
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(&id)?.parent
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Walk from `id` towards the root, yielding `id` first
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            dom: self,
            current: Some(id),
        }
    }
}

/// Iterator over an element and its ancestors
pub struct Ancestors<'a> {
    dom: &'a Dom,
    current: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let id = self.current?;
        self.current = self.dom.parent_of(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_classification() {
        assert_eq!(ElementKind::Paragraph.role(), ElementRole::PlainText);
        assert_eq!(ElementKind::Div.role(), ElementRole::PlainText);
        assert_eq!(ElementKind::TextWidget.role(), ElementRole::AdaptableWidget);
        assert_eq!(ElementKind::Image.role(), ElementRole::Unsupported);
        assert_eq!(ElementKind::Table.role(), ElementRole::Unsupported);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut dom = Dom::new();
        let a = dom.create(ElementKind::Paragraph, None);
        let b = dom.create(ElementKind::Paragraph, None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_insert_sibling_shares_parent() {
        let mut dom = Dom::new();
        let parent = dom.create(ElementKind::Div, None);
        let widget = dom.create_widget(Some(parent), "hello");
        let surface = dom.insert_sibling(widget, ElementKind::Div).unwrap();
        assert_eq!(dom.parent_of(surface), Some(parent));
    }

    #[test]
    fn test_ancestors_walks_to_root() {
        let mut dom = Dom::new();
        let root = dom.create(ElementKind::Article, None);
        let mid = dom.create(ElementKind::Div, Some(root));
        let leaf = dom.create(ElementKind::Span, Some(mid));

        let chain: Vec<_> = dom.ancestors(leaf).collect();
        assert_eq!(chain, vec![leaf, mid, root]);
    }
}
