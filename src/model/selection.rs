//! Last-reported host selection, consulted by the caret probe

use crate::model::ElementId;

/// The host's current selection as last reported via
/// `InputMsg::SelectionChanged`.
///
/// The engine only needs enough to decide whether the caret probe applies:
/// a collapsed selection sitting inside a text node, plus the caret offset
/// at which to insert the transient marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Element the selection lives in, if any
    pub element: Option<ElementId>,
    /// Caret offset (in bytes of the content string) when collapsed
    pub offset: usize,
    /// True when anchor and head coincide
    pub collapsed: bool,
    /// True when the selection endpoint sits inside a text node
    pub in_text_node: bool,
}

impl SelectionState {
    /// A collapsed caret inside a text node of `element`
    pub fn caret(element: ElementId, offset: usize) -> Self {
        Self {
            element: Some(element),
            offset,
            collapsed: true,
            in_text_node: true,
        }
    }

    /// True when the delimiter-triggered caret probe should run
    pub fn probeable(&self) -> bool {
        self.collapsed && self.in_text_node && self.element.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_probeable() {
        assert!(SelectionState::caret(ElementId(1), 5).probeable());
    }

    #[test]
    fn test_default_is_not_probeable() {
        assert!(!SelectionState::default().probeable());
    }

    #[test]
    fn test_range_selection_is_not_probeable() {
        let sel = SelectionState {
            element: Some(ElementId(1)),
            offset: 0,
            collapsed: false,
            in_text_node: true,
        };
        assert!(!sel.probeable());
    }
}
