//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{ElementId, RegionId, SelectionState};

/// Modifier keys held during a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        meta: false,
        shift: false,
    };

    /// True if a chord modifier (ctrl/alt/meta) is held.
    /// Shift alone still produces content, so it does not make a chord.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A key event as delivered by the host.
///
/// `identifier` is the host's key identifier string: either a Unicode
/// code-point form ("U+002E") or a named key ("Enter", "Escape").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub identifier: Option<String>,
    pub code: Option<u32>,
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A printable character key, using the "U+XXXX" identifier form
    pub fn character(ch: char) -> Self {
        Self {
            identifier: Some(format!("U+{:04X}", ch as u32)),
            code: Some(ch as u32),
            modifiers: Modifiers::NONE,
        }
    }

    /// A named key ("Enter", "Escape", "Left")
    pub fn named(name: &str) -> Self {
        Self {
            identifier: Some(name.to_string()),
            code: None,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// Normalized input character or named key.
    ///
    /// A "U+XXXX" identifier resolves to its character; anything else falls
    /// back to the raw identifier string (so "Enter" stays "Enter", and a
    /// malformed code-point form is passed through rather than failing
    /// classification).
    pub fn normalized(&self) -> Option<String> {
        let id = self.identifier.as_deref()?;
        if let Some(hex) = id.strip_prefix("U+") {
            if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                if let Some(ch) = u32::from_str_radix(hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    return Some(ch.to_string());
                }
            }
        }
        Some(id.to_string())
    }

    /// True for the escape key in either identifier form
    pub fn is_escape(&self) -> bool {
        self.code == Some(27)
            || matches!(self.identifier.as_deref(), Some("Escape"))
            || self.normalized().as_deref() == Some("\u{1b}")
    }
}

/// What kind of host event asked for a region activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pointer,
    Focus,
}

/// The host event that triggered an activation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceEvent {
    pub element: ElementId,
    pub kind: SourceKind,
}

/// Explicit lifecycle operations on regions
#[derive(Debug, Clone)]
pub enum RegionMsg {
    /// Bind an element as an editable region (runs initialization)
    Bind { element: ElementId },
    /// Tear a region down, restoring the original element
    Destroy { region: RegionId },
    /// Make a region the active one
    Activate {
        region: RegionId,
        source: Option<SourceEvent>,
    },
    /// Explicitly deactivate a region (never wire native blur here directly)
    Blur { region: RegionId },
    /// Re-enable editing on a region
    Enable { region: RegionId },
    /// Disable editing on a region (it stays ready)
    Disable { region: RegionId },
    /// Checkpoint the region content as unmodified
    SetUnmodified { region: RegionId },
    /// The host finished booting; complete deferred initializations
    HostStarted,
}

/// Raw input events from the host, routed to regions by element
#[derive(Debug, Clone)]
pub enum InputMsg {
    PointerDown { element: ElementId },
    FocusGained { element: ElementId },
    KeyDown { element: ElementId, key: KeyInput },
    KeyUp { element: ElementId, key: KeyInput },
    Paste { element: ElementId },
    SelectionChanged { selection: SelectionState },
}

/// Deferred timer firings delivered by the runtime.
///
/// `generation` is the region's change generation at scheduling time; a
/// firing whose generation no longer matches is stale and gets discarded.
#[derive(Debug, Clone, Copy)]
pub enum TimerMsg {
    DelayElapsed { region: RegionId, generation: u64 },
    IdleElapsed { region: RegionId, generation: u64 },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Region(RegionMsg),
    Input(InputMsg),
    Timer(TimerMsg),
}

impl Msg {
    /// Create a bind message for an element
    pub fn bind(element: ElementId) -> Self {
        Msg::Region(RegionMsg::Bind { element })
    }

    /// Create a key-up input message
    pub fn key_up(element: ElementId, key: KeyInput) -> Self {
        Msg::Input(InputMsg::KeyUp { element, key })
    }
}
