//! Per-region state for the lifecycle controller and change engine

use crate::messages::KeyInput;
use crate::model::ElementId;

/// Identifies an editable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// One editable region bound to a host element.
///
/// `target` is the element currently presenting the editable surface; it
/// differs from `original` when an adaptable widget was given a sibling
/// surface at init. Timer state is carried as a `change_generation` counter:
/// every qualifying input event bumps it, so an outstanding timer whose
/// generation no longer matches is stale and its firing is a no-op. That is
/// the whole cancellation story — last writer wins, nothing queues.
#[derive(Debug, Clone)]
pub struct EditableRegion {
    pub id: RegionId,
    pub target: ElementId,
    pub original: ElementId,
    /// True only after successful initialization; never true again after destroy
    pub ready: bool,
    /// True while this region holds editing rights
    pub active: bool,
    /// Content checkpoint answering "modified since last save?"
    pub last_known_good: String,
    /// Rotating snapshot: content as of the most recent change notification
    pub change_snapshot: String,
    /// Keys that end an edit unit and trigger the debounce delay
    pub delimiters: Vec<String>,
    pub idle_ms: u64,
    pub delay_ms: u64,
    pub change_generation: u64,
    /// Key captured when a delayed keypress notification was scheduled
    pub pending_key: Option<KeyInput>,
    /// Elements routed to this region while it is ready (released on destroy)
    pub bindings: Vec<ElementId>,
}

impl EditableRegion {
    pub fn new(id: RegionId, element: ElementId) -> Self {
        Self {
            id,
            target: element,
            original: element,
            ready: false,
            active: false,
            last_known_good: String::new(),
            change_snapshot: String::new(),
            delimiters: Vec::new(),
            idle_ms: 0,
            delay_ms: 0,
            change_generation: 0,
            pending_key: None,
            bindings: Vec::new(),
        }
    }

    /// Read-and-reset: returns the snapshot as of the previous notification
    /// and rotates it to `current`.
    pub fn rotate_snapshot(&mut self, current: String) -> String {
        std::mem::replace(&mut self.change_snapshot, current)
    }

    /// Invalidate any outstanding delay/idle timer
    pub fn bump_generation(&mut self) -> u64 {
        self.change_generation += 1;
        self.pending_key = None;
        self.change_generation
    }

    pub fn is_delimiter(&self, key: &str) -> bool {
        self.delimiters.iter().any(|d| d == key)
    }
}
