//! Smart-content-change classification and timer handling
//!
//! Every qualifying event is classified into one of three paths:
//! delimiter keystroke -> debounce delay -> `Trigger::Keypress`,
//! other keystroke -> idle threshold -> `Trigger::Idle`,
//! paste and deactivation -> immediate `Trigger::Paste` / `Trigger::Blur`.
//!
//! Timers are never cancelled in the runtime; each qualifying event bumps the
//! region's change generation, and a firing whose generation no longer
//! matches is discarded here.

use crate::commands::Cmd;
use crate::events::{Notification, RegionEvent, SmartChange, Trigger};
use crate::messages::{KeyInput, TimerMsg};
use crate::model::{EditorModel, RegionId};
use crate::util::{insert_marker, CARET_MARKER};

/// A content-affecting event to classify
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    Key(KeyInput),
    Paste,
    Blur,
}

/// Classify an event on a region and schedule or emit accordingly
pub fn smart_content_change(
    model: &mut EditorModel,
    region_id: RegionId,
    event: ChangeEvent,
) -> Option<Cmd> {
    let generation = {
        let r = model.registry.get_mut(region_id)?;
        if !r.ready {
            return None;
        }
        // supersedes any outstanding timer
        r.bump_generation()
    };

    let current = model.region_contents(region_id)?;
    if current == model.registry.get(region_id)?.change_snapshot {
        // content did not actually change (arrow keys, selection moves)
        return None;
    }

    if let ChangeEvent::Key(key) = &event {
        if key.modifiers.is_chord() {
            tracing::trace!("modifier chord on region {:?}, not a content change", region_id);
            return None;
        }
    }

    match event {
        ChangeEvent::Key(key) => {
            let Some(normalized) = key.normalized() else {
                return None;
            };
            let r = model.registry.get_mut(region_id)?;
            if r.is_delimiter(&normalized) {
                tracing::debug!(
                    "delimiter {:?} on region {:?}, scheduling delay timer",
                    normalized,
                    region_id
                );
                r.pending_key = Some(key);
                Some(Cmd::StartDelayTimer {
                    region: region_id,
                    generation,
                    delay_ms: r.delay_ms,
                })
            } else {
                tracing::trace!("key {:?} on region {:?}, scheduling idle timer", normalized, region_id);
                Some(Cmd::StartIdleTimer {
                    region: region_id,
                    generation,
                    idle_ms: r.idle_ms,
                })
            }
        }
        ChangeEvent::Paste => emit(model, region_id, Trigger::Paste, None),
        ChangeEvent::Blur => emit(model, region_id, Trigger::Blur, None),
    }
}

/// Handle a timer firing delivered by the runtime
pub fn update_timer(model: &mut EditorModel, msg: TimerMsg) -> Option<Cmd> {
    match msg {
        TimerMsg::DelayElapsed { region, generation } => {
            if !timer_live(model, region, generation) {
                return None;
            }
            let key = model.registry.get_mut(region)?.pending_key.take();
            let mut cmds = Vec::new();
            if let Some(cmd) = emit(model, region, Trigger::Keypress, key) {
                cmds.push(cmd);
            }
            if let Some(cmd) = probe_caret(model, region) {
                cmds.push(cmd);
            }
            Some(Cmd::batch(cmds))
        }
        TimerMsg::IdleElapsed { region, generation } => {
            if !timer_live(model, region, generation) {
                return None;
            }
            emit(model, region, Trigger::Idle, None)
        }
    }
}

/// True iff the region is still ready and `generation` is still current
fn timer_live(model: &EditorModel, region: RegionId, generation: u64) -> bool {
    match model.registry.get(region) {
        Some(r) if r.ready && r.change_generation == generation => true,
        Some(r) => {
            tracing::debug!(
                "stale timer for region {:?} (generation {} vs {})",
                region,
                generation,
                r.change_generation
            );
            false
        }
        None => false,
    }
}

/// Publish a change notification, rotating the region's snapshot
fn emit(
    model: &mut EditorModel,
    region_id: RegionId,
    trigger: Trigger,
    key: Option<KeyInput>,
) -> Option<Cmd> {
    let current = model.region_contents(region_id)?;
    let snapshot = model.registry.get_mut(region_id)?.rotate_snapshot(current);

    let (key_identifier, key_code, ch) = match key {
        Some(k) => (k.identifier.clone(), k.code, k.normalized()),
        None => (None, None, None),
    };

    tracing::debug!("smart change on region {:?}: {:?}", region_id, trigger);
    Some(Cmd::Publish(Notification::global(RegionEvent::SmartChange(
        SmartChange {
            region: region_id,
            key_identifier,
            key_code,
            ch,
            trigger,
            snapshot,
        },
    ))))
}

/// Measure the caret position by inserting a transient marker, asking the
/// layout probe where it landed, and restoring the content. The marker never
/// survives; `region_contents` also strips it defensively.
fn probe_caret(model: &mut EditorModel, region_id: RegionId) -> Option<Cmd> {
    if !model.selection.probeable() {
        return None;
    }
    let sel_element = model.selection.element?;
    if model.region_for(sel_element) != Some(region_id) {
        return None;
    }

    let original = model.dom.get(sel_element)?.content.clone();
    let with_marker = insert_marker(&original, model.selection.offset, CARET_MARKER);
    model.dom.get_mut(sel_element)?.content = with_marker;

    let position = model.probe.locate_marker(&model.dom, sel_element);

    model.dom.get_mut(sel_element)?.content = original;

    let (x, y) = position?;
    Some(Cmd::Publish(Notification::global(RegionEvent::CaretProbed {
        region: region_id,
        x,
        y,
    })))
}
