//! Registry of editable regions and the process-wide active-region pointer
//!
//! Modeled as an explicit service rather than a bare global: all mutation of
//! "which region is active" goes through `set_active`/`clear_active`.

use std::collections::HashMap;

use crate::model::{EditableRegion, ElementId, RegionId};

/// Owns all registered regions plus the single active-region slot
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: HashMap<RegionId, EditableRegion>,
    active: Option<RegionId>,
    next_id: u64,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new region bound to `element`, returning its id
    pub fn register(&mut self, element: ElementId) -> RegionId {
        self.next_id += 1;
        let id = RegionId(self.next_id);
        self.regions.insert(id, EditableRegion::new(id, element));
        id
    }

    /// Remove a region entirely; clears the active slot if it held this one
    pub fn unregister(&mut self, id: RegionId) -> Option<EditableRegion> {
        if self.active == Some(id) {
            self.active = None;
        }
        self.regions.remove(&id)
    }

    pub fn get(&self, id: RegionId) -> Option<&EditableRegion> {
        self.regions.get(&id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut EditableRegion> {
        self.regions.get_mut(&id)
    }

    pub fn active(&self) -> Option<RegionId> {
        self.active
    }

    /// Make `id` the active region, returning the previously active one.
    /// The previous region's `active` flag is cleared; callers are
    /// responsible for publishing its deactivation first.
    pub fn set_active(&mut self, id: RegionId) -> Option<RegionId> {
        let previous = self.active.filter(|p| *p != id);
        if let Some(prev) = previous {
            if let Some(region) = self.regions.get_mut(&prev) {
                region.active = false;
            }
        }
        if let Some(region) = self.regions.get_mut(&id) {
            region.active = true;
            self.active = Some(id);
        }
        previous
    }

    /// Clear the active slot if `id` currently holds it
    pub fn clear_active(&mut self, id: RegionId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Ids of all regions that have not completed initialization yet
    pub fn pending_init(&self) -> Vec<RegionId> {
        let mut ids: Vec<_> = self
            .regions
            .values()
            .filter(|r| !r.ready)
            .map(|r| r.id)
            .collect();
        ids.sort();
        ids
    }
}
