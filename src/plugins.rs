//! Collaborator hooks injected by the host
//!
//! These are the engine's external seams: markup cleanup applied to content
//! copies, key pre-processing on key-down, and layout probing for the caret
//! position. Each has a do-nothing default so the engine runs standalone.

use crate::messages::KeyInput;
use crate::model::{Dom, ElementId, RegionId};

/// Cleanup pass applied to a detached content copy before it is handed out.
///
/// Runs after the engine's own bookkeeping-markup strip; must treat its
/// input as a throwaway copy (the live element is never passed in).
pub trait MarkupCleaner {
    fn clean(&self, html: &mut String);
}

/// Default cleaner: leaves content untouched
#[derive(Debug, Default)]
pub struct NoopCleaner;

impl MarkupCleaner for NoopCleaner {
    fn clean(&self, _html: &mut String) {}
}

/// Key-down hook that may swallow a keystroke before default handling.
///
/// Returns true when the keystroke was consumed; the engine then suppresses
/// its own default handling for that event.
pub trait KeyInterceptor {
    fn pre_process(&mut self, region: RegionId, key: &KeyInput) -> bool;
}

/// Default interceptor: consumes nothing
#[derive(Debug, Default)]
pub struct PassthroughInterceptor;

impl KeyInterceptor for PassthroughInterceptor {
    fn pre_process(&mut self, _region: RegionId, _key: &KeyInput) -> bool {
        false
    }
}

/// Resolves the screen position of the transient caret marker.
///
/// The engine inserts the marker into the element content, asks the probe to
/// locate it, and removes it again; implementations typically look the marker
/// up in their rendered layout.
pub trait LayoutProbe {
    fn locate_marker(&self, dom: &Dom, element: ElementId) -> Option<(f32, f32)>;
}

/// Default probe: reports no position, so no caret notification is published
#[derive(Debug, Default)]
pub struct NullProbe;

impl LayoutProbe for NullProbe {
    fn locate_marker(&self, _dom: &Dom, _element: ElementId) -> Option<(f32, f32)> {
        None
    }
}
