//! Change classification and debounce behavior, with timers hand-delivered
//! for determinism

mod common;

use common::{activate, model_with_region, type_text};
use editable::{
    update, Cmd, InputMsg, KeyInput, Msg, RegionEvent, RegionId, SelectionState, SmartChange,
    TimerMsg, Trigger,
};

fn key_up(element: editable::ElementId, key: KeyInput) -> Msg {
    Msg::key_up(element, key)
}

fn delay_generation(cmd: &Cmd) -> Option<(RegionId, u64)> {
    match cmd {
        Cmd::StartDelayTimer {
            region, generation, ..
        } => Some((*region, *generation)),
        _ => None,
    }
}

fn smart_changes(cmd: &Cmd) -> Vec<SmartChange> {
    cmd.notifications()
        .iter()
        .filter_map(|n| match &n.event {
            RegionEvent::SmartChange(c) => Some(c.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn delimiter_keystroke_debounces_to_one_notification() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    // three rapid sentence endings; only the last scheduled timer is live
    let mut generations = Vec::new();
    for ch in [".", "!", "?"] {
        type_text(&mut model, element, ch);
        let cmd = update(&mut model, key_up(element, KeyInput::character(ch.chars().next().unwrap()))).unwrap();
        generations.push(delay_generation(&cmd).unwrap());
    }

    // the two superseded timers fire into the void
    for &(r, generation) in &generations[..2] {
        let cmd = update(&mut model, Msg::Timer(TimerMsg::DelayElapsed { region: r, generation }));
        assert!(cmd.is_none());
    }

    let (r, generation) = generations[2];
    let cmd = update(&mut model, Msg::Timer(TimerMsg::DelayElapsed { region: r, generation })).unwrap();
    let changes = smart_changes(&cmd);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].trigger, Trigger::Keypress);
    assert_eq!(changes[0].ch.as_deref(), Some("?"));
    assert_eq!(changes[0].snapshot, "Hello");
}

#[test]
fn non_delimiter_keystroke_waits_for_idle() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, "a");
    let cmd = update(&mut model, key_up(element, KeyInput::character('a'))).unwrap();
    let generation = match cmd {
        Cmd::StartIdleTimer { generation, .. } => generation,
        other => panic!("expected idle timer, got {:?}", other),
    };

    let cmd = update(&mut model, Msg::Timer(TimerMsg::IdleElapsed { region, generation })).unwrap();
    let changes = smart_changes(&cmd);
    assert_eq!(changes[0].trigger, Trigger::Idle);
    assert_eq!(changes[0].snapshot, "Hello");
    assert_eq!(changes[0].ch, None);
}

#[test]
fn continued_typing_suppresses_the_idle_notification() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, "a");
    let cmd = update(&mut model, key_up(element, KeyInput::character('a'))).unwrap();
    let stale = match cmd {
        Cmd::StartIdleTimer { generation, .. } => generation,
        other => panic!("expected idle timer, got {:?}", other),
    };

    type_text(&mut model, element, "b");
    update(&mut model, key_up(element, KeyInput::character('b')));

    assert!(update(&mut model, Msg::Timer(TimerMsg::IdleElapsed { region, generation: stale }))
        .is_none());
}

#[test]
fn snapshot_is_read_and_reset() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, " world");
    let cmd = update(&mut model, Msg::Input(InputMsg::Paste { element })).unwrap();
    assert_eq!(smart_changes(&cmd)[0].snapshot, "Hello");

    // next change reports the rotated snapshot, not the original
    type_text(&mut model, element, "!");
    let cmd = update(&mut model, Msg::Input(InputMsg::Paste { element })).unwrap();
    assert_eq!(smart_changes(&cmd)[0].snapshot, "Hello world");
}

#[test]
fn paste_and_blur_emit_without_timers() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, " pasted");
    let cmd = update(&mut model, Msg::Input(InputMsg::Paste { element })).unwrap();
    assert!(!cmd.starts_timer());
    assert_eq!(smart_changes(&cmd)[0].trigger, Trigger::Paste);

    type_text(&mut model, element, " more");
    let cmd = update(
        &mut model,
        Msg::Region(editable::RegionMsg::Blur { region }),
    )
    .unwrap();
    assert!(!cmd.starts_timer());
    assert_eq!(smart_changes(&cmd)[0].trigger, Trigger::Blur);
}

#[test]
fn modifier_chords_are_not_content_changes() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, "x");
    for key in [
        KeyInput::character('z').with_ctrl(),
        KeyInput::character('v').with_meta(),
        KeyInput::character('f').with_alt(),
    ] {
        assert!(update(&mut model, key_up(element, key)).is_none());
    }

    // a plain keystroke afterwards still classifies normally
    let cmd = update(&mut model, key_up(element, KeyInput::character('x'))).unwrap();
    assert!(cmd.starts_timer());
}

#[test]
fn unchanged_content_takes_the_fast_path() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    for key in [
        KeyInput::named("Left"),
        KeyInput::named("Right"),
        KeyInput::named("Down"),
    ] {
        assert!(update(&mut model, key_up(element, key)).is_none());
    }
}

#[test]
fn named_delimiter_keys_classify_as_delimiters() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, "\n");
    let cmd = update(&mut model, key_up(element, KeyInput::named("Enter"))).unwrap();
    let (r, generation) = match cmd {
        Cmd::StartDelayTimer {
            region, generation, ..
        } => (region, generation),
        other => panic!("expected delay timer, got {:?}", other),
    };
    assert_eq!(r, region);

    let cmd = update(&mut model, Msg::Timer(TimerMsg::DelayElapsed { region: r, generation })).unwrap();
    let changes = smart_changes(&cmd);
    assert_eq!(changes[0].ch.as_deref(), Some("Enter"));
    assert_eq!(changes[0].key_identifier.as_deref(), Some("Enter"));
}

#[test]
fn timer_firing_after_destroy_is_ignored() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    type_text(&mut model, element, ".");
    let cmd = update(&mut model, key_up(element, KeyInput::character('.'))).unwrap();
    let (r, generation) = delay_generation(&cmd).unwrap();

    update(&mut model, Msg::Region(editable::RegionMsg::Destroy { region }));
    assert!(update(&mut model, Msg::Timer(TimerMsg::DelayElapsed { region: r, generation }))
        .is_none());
}

#[test]
fn escape_deactivates_without_reactivating() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    let cmd = update(&mut model, key_up(element, KeyInput::named("Escape"))).unwrap();
    assert!(cmd
        .notifications()
        .iter()
        .any(|n| matches!(n.event, RegionEvent::Deactivated { region: r } if r == region)));
    assert_eq!(model.registry.active(), None);

    // further keystrokes on the now-inactive region do nothing
    type_text(&mut model, element, ".");
    assert!(update(&mut model, key_up(element, KeyInput::character('.'))).is_none());
}

#[test]
fn selection_updates_feed_the_caret_probe_gate() {
    let (mut model, region, element) = model_with_region("Hello");
    activate(&mut model, region);

    update(
        &mut model,
        Msg::Input(InputMsg::SelectionChanged {
            selection: SelectionState::caret(element, 5),
        }),
    );
    assert!(model.selection.probeable());

    // default probe reports no position, so the delay firing emits only the change
    type_text(&mut model, element, ".");
    let cmd = update(&mut model, key_up(element, KeyInput::character('.'))).unwrap();
    let (r, generation) = delay_generation(&cmd).unwrap();
    let cmd = update(&mut model, Msg::Timer(TimerMsg::DelayElapsed { region: r, generation })).unwrap();
    assert_eq!(cmd.notifications().len(), 1);
    assert!(!cmd
        .notifications()
        .iter()
        .any(|n| matches!(n.event, RegionEvent::CaretProbed { .. })));
}
