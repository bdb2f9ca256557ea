//! Lifecycle controller: region binding, activation, and teardown
//!
//! Failure never surfaces through a return channel here. An element that
//! cannot be made editable leaves the region non-ready and destroyed; the
//! caller reads the absence of readiness as the error signal.

use crate::commands::Cmd;
use crate::events::{Notification, RegionEvent};
use crate::messages::{RegionMsg, SourceEvent, SourceKind};
use crate::model::{EditorModel, ElementId, ElementKind, ElementRole, RegionId};
use crate::update::change::{self, ChangeEvent};

/// Handle explicit region lifecycle messages
pub fn update_region(model: &mut EditorModel, msg: RegionMsg) -> Option<Cmd> {
    match msg {
        RegionMsg::Bind { element } => bind(model, element),
        RegionMsg::Destroy { region } => destroy(model, region),
        RegionMsg::Activate { region, source } => activate(model, region, source),
        RegionMsg::Blur { region } => blur(model, region),
        RegionMsg::Enable { region } => set_enabled(model, region, true),
        RegionMsg::Disable { region } => set_enabled(model, region, false),
        RegionMsg::SetUnmodified { region } => set_unmodified(model, region),
        RegionMsg::HostStarted => host_started(model),
    }
}

/// Bind an element as an editable region and attempt initialization
pub fn bind(model: &mut EditorModel, element: ElementId) -> Option<Cmd> {
    if !model.dom.contains(element) {
        tracing::warn!("bind: element {:?} does not exist", element);
        return None;
    }

    let region = model.registry.register(element);

    // smart-change settings, with any host overrides already merged in
    let sc = model.settings.smart_change.clone();
    if let Some(r) = model.registry.get_mut(region) {
        r.delimiters = sc.delimiters;
        r.idle_ms = sc.idle_ms;
        r.delay_ms = sc.delay_ms;
    }

    init(model, region)
}

/// Run the capability check and adaptation; complete only on a started host
fn init(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    let original = model.registry.get(region)?.original;
    let kind = model.dom.get(original)?.kind;

    match kind.role() {
        ElementRole::Unsupported => {
            tracing::warn!(
                "cannot make {:?} editable, destroying region {:?}",
                kind,
                region
            );
            return destroy(model, region);
        }
        ElementRole::AdaptableWidget => {
            adapt_widget(model, region)?;
        }
        ElementRole::PlainText => {}
    }

    if !model.started {
        tracing::debug!(
            "host not started yet, deferring init of region {:?}",
            region
        );
        return None;
    }

    complete_init(model, region)
}

/// Give an adaptable widget a sibling editable surface mirroring its value
/// and hide the widget itself. The widget's value is synchronized back via
/// [`sync_widget_value`] (to be called by the host on form submission) and
/// on destroy.
fn adapt_widget(model: &mut EditorModel, region: RegionId) -> Option<()> {
    let (target, original) = {
        let r = model.registry.get(region)?;
        (r.target, r.original)
    };
    if target != original {
        return Some(()); // already adapted
    }

    let value = model.dom.get(original)?.value.clone();
    let surface = model.dom.insert_sibling(original, ElementKind::Div)?;
    model.dom.get_mut(surface)?.content = value;
    model.dom.get_mut(original)?.hidden = true;
    model.registry.get_mut(region)?.target = surface;
    Some(())
}

/// Copy the editable surface's current content back into the adapted
/// widget's value. Hosts call this when the surrounding form is submitted.
pub fn sync_widget_value(model: &mut EditorModel, region: RegionId) -> Option<()> {
    let (target, original) = {
        let r = model.registry.get(region)?;
        (r.target, r.original)
    };
    if target == original {
        return None;
    }
    let value = model.region_contents(region)?;
    model.dom.get_mut(original)?.value = value;
    Some(())
}

/// Mark the target editable, install input routing, checkpoint content, and
/// publish the created notification
fn complete_init(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    let target = model.registry.get(region)?.target;
    model.dom.get_mut(target)?.editable = true;
    model.install_route(target, region);

    let contents = model.region_contents(region)?;
    let r = model.registry.get_mut(region)?;
    r.bindings.push(target);
    r.last_known_good = contents.clone();
    r.change_snapshot = contents;
    r.ready = true;

    tracing::debug!("region {:?} ready (target {:?})", region, target);
    Some(Cmd::Publish(Notification::global(RegionEvent::Created {
        region,
    })))
}

/// The host finished booting: complete all deferred initializations
fn host_started(model: &mut EditorModel) -> Option<Cmd> {
    model.started = true;

    let mut cmds = Vec::new();
    for region in model.registry.pending_init() {
        if let Some(cmd) = complete_init(model, region) {
            cmds.push(cmd);
        }
    }
    if cmds.is_empty() {
        None
    } else {
        Some(Cmd::batch(cmds))
    }
}

/// Make a region the active one, deactivating whatever was active before
pub fn activate(
    model: &mut EditorModel,
    region: RegionId,
    source: Option<SourceEvent>,
) -> Option<Cmd> {
    let current_active = model.registry.active();

    // A focus event on the parent of the active region is focus bouncing
    // from a nested region's activation; it must not hijack the focus.
    if let Some(src) = source {
        if src.kind == SourceKind::Focus {
            if let Some(active_id) = current_active.filter(|a| *a != region) {
                if let Some(active) = model.registry.get(active_id) {
                    if model.dom.parent_of(active.target) == Some(src.element) {
                        tracing::debug!(
                            "ignoring focus on parent of active region {:?}",
                            active_id
                        );
                        return None;
                    }
                }
            }
        }
    }

    {
        let r = model.registry.get(region)?;
        if !r.ready || r.active {
            return None;
        }
    }
    if model.is_disabled(region) {
        return None;
    }

    let mut cmds = Vec::new();
    let previous = current_active.filter(|p| *p != region);
    if let Some(prev) = previous {
        if let Some(cmd) = blur(model, prev) {
            cmds.push(cmd);
        }
    }

    model.registry.set_active(region);
    model.focused = model.registry.get(region).map(|r| r.target);

    tracing::debug!("region {:?} activated (previous {:?})", region, previous);
    cmds.push(Cmd::Publish(Notification::global(RegionEvent::Activated {
        region,
        previous,
    })));
    cmds.push(Cmd::Publish(Notification::regional(
        region,
        RegionEvent::Activated { region, previous },
    )));
    Some(Cmd::batch(cmds))
}

/// Explicit deactivation. Never wire native blur events here directly: many
/// legitimate in-region interactions fire spurious native blurs.
pub fn blur(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    let target = {
        let r = model.registry.get_mut(region)?;
        if !r.ready {
            return None;
        }
        r.active = false;
        r.target
    };
    model.registry.clear_active(region);
    if model.focused == Some(target) {
        model.focused = None;
    }

    let mut cmds = vec![
        Cmd::Publish(Notification::global(RegionEvent::Deactivated { region })),
        Cmd::Publish(Notification::regional(
            region,
            RegionEvent::Deactivated { region },
        )),
    ];

    // Flush pending edits as a semantic change: no further keystroke will
    // arrive to do it for us.
    if let Some(cmd) = change::smart_content_change(model, region, ChangeEvent::Blur) {
        cmds.push(cmd);
    }

    tracing::debug!("region {:?} deactivated", region);
    Some(Cmd::batch(cmds))
}

/// Tear a region down, restoring the original element and unregistering
pub fn destroy(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    let mut cmds = Vec::new();

    if model.registry.active() == Some(region) {
        if let Some(cmd) = blur(model, region) {
            cmds.push(cmd);
        }
        cmds.push(Cmd::Publish(Notification::global(
            RegionEvent::HideFloatingUi,
        )));
    }

    let (target, original) = {
        let r = model.registry.get(region)?;
        (r.target, r.original)
    };

    if target != original {
        // adapted widget: move the surface content back and restore the widget
        let value = model.region_contents(region).unwrap_or_default();
        model.dom.remove(target);
        if let Some(orig) = model.dom.get_mut(original) {
            orig.value = value;
            orig.hidden = false;
        }
    } else if let Some(el) = model.dom.get_mut(target) {
        el.editable = false;
    }

    // Release routing handles so no handler fires on a destroyed region,
    // and invalidate any outstanding timers.
    let bindings = model
        .registry
        .get(region)
        .map(|r| r.bindings.clone())
        .unwrap_or_default();
    for element in bindings {
        model.release_route(element);
    }
    if let Some(r) = model.registry.get_mut(region) {
        r.ready = false;
        r.bump_generation();
    }

    cmds.push(Cmd::Publish(Notification::global(RegionEvent::Destroyed {
        region,
    })));
    model.registry.unregister(region);

    tracing::debug!("region {:?} destroyed", region);
    Some(Cmd::batch(cmds))
}

/// Toggle native content editing on the target element; idempotent
fn set_enabled(model: &mut EditorModel, region: RegionId, enabled: bool) -> Option<Cmd> {
    let target = model.registry.get(region)?.target;
    let el = model.dom.get_mut(target)?;
    if el.editable != enabled {
        el.editable = enabled;
        tracing::debug!("region {:?} {}", region, if enabled { "enabled" } else { "disabled" });
    }
    None
}

/// Re-checkpoint the region content as unmodified
fn set_unmodified(model: &mut EditorModel, region: RegionId) -> Option<Cmd> {
    let contents = model.region_contents(region)?;
    model.registry.get_mut(region)?.last_known_good = contents;
    None
}
