//! Engine model - the complete state of the region engine
//!
//! All state lives here and is mutated only inside `update`; timer threads
//! and subscribers never touch it directly.

pub mod dom;
pub mod region;
pub mod registry;
pub mod selection;

pub use dom::{Dom, Element, ElementId, ElementKind, ElementRole};
pub use region::{EditableRegion, RegionId};
pub use registry::RegionRegistry;
pub use selection::SelectionState;

use std::collections::HashMap;

use crate::config::Settings;
use crate::plugins::{
    KeyInterceptor, LayoutProbe, MarkupCleaner, NoopCleaner, NullProbe, PassthroughInterceptor,
};
use crate::util::strip_internal_markup;

/// The complete engine model
pub struct EditorModel {
    /// Host content the regions live in
    pub dom: Dom,
    /// All regions plus the active-region singleton
    pub registry: RegionRegistry,
    /// Last selection reported by the host
    pub selection: SelectionState,
    /// Smart-change configuration applied to newly bound regions
    pub settings: Settings,
    /// True once the host signalled it is fully started; initialization of
    /// regions bound earlier completes on `RegionMsg::HostStarted`
    pub started: bool,
    /// Element currently holding input focus, if any
    pub focused: Option<ElementId>,
    /// Input routing table: element -> owning region. Entries are the
    /// subscription handles installed at init and released on destroy, so no
    /// event ever reaches a destroyed region.
    routes: HashMap<ElementId, RegionId>,
    pub cleaner: Box<dyn MarkupCleaner>,
    pub interceptor: Box<dyn KeyInterceptor>,
    pub probe: Box<dyn LayoutProbe>,
}

impl std::fmt::Debug for EditorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorModel")
            .field("registry", &self.registry)
            .field("selection", &self.selection)
            .field("started", &self.started)
            .field("focused", &self.focused)
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl EditorModel {
    /// Create a model for a host that has not finished booting yet
    pub fn new(settings: Settings) -> Self {
        Self {
            dom: Dom::new(),
            registry: RegionRegistry::new(),
            selection: SelectionState::default(),
            settings,
            started: false,
            focused: None,
            routes: HashMap::new(),
            cleaner: Box::new(NoopCleaner),
            interceptor: Box::new(PassthroughInterceptor),
            probe: Box::new(NullProbe),
        }
    }

    /// Create a model for a host that is already fully started
    pub fn started(settings: Settings) -> Self {
        let mut model = Self::new(settings);
        model.started = true;
        model
    }

    pub fn with_cleaner(mut self, cleaner: Box<dyn MarkupCleaner>) -> Self {
        self.cleaner = cleaner;
        self
    }

    pub fn with_interceptor(mut self, interceptor: Box<dyn KeyInterceptor>) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn with_probe(mut self, probe: Box<dyn LayoutProbe>) -> Self {
        self.probe = probe;
        self
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    pub(crate) fn install_route(&mut self, element: ElementId, region: RegionId) {
        self.routes.insert(element, region);
    }

    pub(crate) fn release_route(&mut self, element: ElementId) {
        self.routes.remove(&element);
    }

    /// Resolve the region owning `element`, walking up the ancestor chain.
    /// The innermost routed ancestor wins, so an event inside a nested
    /// region never bubbles into the enclosing one.
    pub fn region_for(&self, element: ElementId) -> Option<RegionId> {
        self.dom
            .ancestors(element)
            .find_map(|id| self.routes.get(&id).copied())
    }

    // =========================================================================
    // Region queries
    // =========================================================================

    pub fn region(&self, id: RegionId) -> Option<&EditableRegion> {
        self.registry.get(id)
    }

    /// Sanitized content of a region: a detached copy of the target element's
    /// content with bookkeeping markup stripped and the cleanup plugin
    /// applied. Never mutates the live element.
    pub fn region_contents(&self, id: RegionId) -> Option<String> {
        let region = self.registry.get(id)?;
        let element = self.dom.get(region.target)?;
        let mut copy = strip_internal_markup(&element.content);
        self.cleaner.clean(&mut copy);
        Some(copy)
    }

    /// True iff current content differs from the last unmodified checkpoint
    pub fn is_modified(&self, id: RegionId) -> bool {
        match (self.region_contents(id), self.registry.get(id)) {
            (Some(contents), Some(region)) => contents != region.last_known_good,
            _ => false,
        }
    }

    /// True when native content editing is enabled on the region's target
    pub fn is_enabled(&self, id: RegionId) -> bool {
        self.registry
            .get(id)
            .and_then(|r| self.dom.get(r.target))
            .map(|el| el.editable)
            .unwrap_or(false)
    }

    pub fn is_disabled(&self, id: RegionId) -> bool {
        !self.is_enabled(id)
    }
}
