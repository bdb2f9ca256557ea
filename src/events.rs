//! Notification types published by the region engine
//!
//! Nothing in the core subscribes to these; hosts register subscribers on the
//! runtime driver (or inspect the `Cmd::Publish` values directly).

use crate::model::RegionId;

/// Scope a notification is published in.
///
/// The engine publishes lifecycle transitions twice: once in the global scope
/// (for host-wide observers such as a floating toolbar) and once in the scope
/// of the region itself (for per-region listeners).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Host-wide scope
    Global,
    /// Scope of a single region
    Region(RegionId),
}

/// What caused a smart content change to be emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A delimiter key ended an edit unit (emitted after the debounce delay)
    Keypress,
    /// No further input arrived within the idle threshold
    Idle,
    /// Content was pasted
    Paste,
    /// The region was deactivated with pending edits
    Blur,
}

/// Payload of a semantic change notification.
///
/// `snapshot` is the region content as of the *previous* notification (or
/// initialization, if none was emitted yet). Emitting a notification rotates
/// the region's change snapshot to the current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartChange {
    pub region: RegionId,
    /// Raw key identifier from the input event ("U+002E", "Enter"), if any
    pub key_identifier: Option<String>,
    /// Numeric key code from the input event, if any
    pub key_code: Option<u32>,
    /// Normalized input character or named key ("." or "Enter"), if any
    pub ch: Option<String>,
    pub trigger: Trigger,
    pub snapshot: String,
}

/// Events published on the notification bus
#[derive(Debug, Clone, PartialEq)]
pub enum RegionEvent {
    /// A region finished initialization
    Created { region: RegionId },
    /// A region was torn down and unregistered
    Destroyed { region: RegionId },
    /// A region became the active one
    Activated {
        region: RegionId,
        previous: Option<RegionId>,
    },
    /// A region lost its active status
    Deactivated { region: RegionId },
    /// A debounced/classified semantic change
    SmartChange(SmartChange),
    /// Screen position of the caret, measured by the transient probe that
    /// follows a delimiter-triggered change
    CaretProbed { region: RegionId, x: f32, y: f32 },
    /// The active region is going away; host-wide floating UI should hide
    HideFloatingUi,
}

/// A scoped notification as published on the bus
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub scope: Scope,
    pub event: RegionEvent,
}

impl Notification {
    pub fn global(event: RegionEvent) -> Self {
        Self {
            scope: Scope::Global,
            event,
        }
    }

    pub fn regional(region: RegionId, event: RegionEvent) -> Self {
        Self {
            scope: Scope::Region(region),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_constructors() {
        let region = RegionId(7);
        let global = Notification::global(RegionEvent::Created { region });
        assert_eq!(global.scope, Scope::Global);

        let local = Notification::regional(region, RegionEvent::Deactivated { region });
        assert_eq!(local.scope, Scope::Region(region));
    }
}
