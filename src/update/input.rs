//! Raw input gatekeeping
//!
//! Host events arrive addressed to elements; the routing table resolves the
//! owning region and the gates here decide whether the event reaches the
//! change engine at all. Only the active, enabled region generates changes.

use crate::commands::Cmd;
use crate::messages::{InputMsg, SourceEvent, SourceKind};
use crate::model::{EditorModel, RegionId};
use crate::update::change::{self, ChangeEvent};
use crate::update::lifecycle;

/// Handle a raw input event from the host
pub fn update_input(model: &mut EditorModel, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::PointerDown { element } => {
            let region = model.region_for(element)?;
            lifecycle::activate(
                model,
                region,
                Some(SourceEvent {
                    element,
                    kind: SourceKind::Pointer,
                }),
            )
        }
        InputMsg::FocusGained { element } => {
            let region = model.region_for(element)?;
            lifecycle::activate(
                model,
                region,
                Some(SourceEvent {
                    element,
                    kind: SourceKind::Focus,
                }),
            )
        }
        InputMsg::KeyDown { element, key } => {
            let region = model.region_for(element)?;
            if !model.registry.get(region)?.ready {
                return None;
            }
            if model.interceptor.pre_process(region, &key) {
                tracing::trace!("key consumed by interceptor on region {:?}", region);
            }
            None
        }
        InputMsg::KeyUp { element, key } => {
            let region = model.region_for(element)?;
            if key.is_escape() {
                let active = model.registry.active()?;
                return lifecycle::blur(model, active);
            }
            if !change_allowed(model, region) {
                return None;
            }
            change::smart_content_change(model, region, ChangeEvent::Key(key))
        }
        InputMsg::Paste { element } => {
            let region = model.region_for(element)?;
            if !change_allowed(model, region) {
                return None;
            }
            change::smart_content_change(model, region, ChangeEvent::Paste)
        }
        InputMsg::SelectionChanged { selection } => {
            model.selection = selection;
            None
        }
    }
}

fn change_allowed(model: &EditorModel, region: RegionId) -> bool {
    model.registry.active() == Some(region) && !model.is_disabled(region)
}
