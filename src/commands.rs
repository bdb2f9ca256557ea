//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update:
//! publishing a notification on the bus, or scheduling one of the two
//! change-detection timers. The runtime driver executes them; tests usually
//! inspect them directly.

use crate::events::Notification;
use crate::model::RegionId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Publish a notification on the bus
    Publish(Notification),
    /// Start the debounce delay timer for a keypress-classified change.
    /// After `delay_ms`, the runtime sends `TimerMsg::DelayElapsed` carrying
    /// the same generation; starting a new timer implicitly supersedes any
    /// previous one because the generation has moved on.
    StartDelayTimer {
        region: RegionId,
        generation: u64,
        delay_ms: u64,
    },
    /// Start the idle timer for an idle-classified change.
    /// After `idle_ms` of silence, the runtime sends `TimerMsg::IdleElapsed`.
    StartIdleTimer {
        region: RegionId,
        generation: u64,
        idle_ms: u64,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, flattening trivial cases
    pub fn batch(mut cmds: Vec<Cmd>) -> Self {
        cmds.retain(|c| !matches!(c, Cmd::None));
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(cmds),
        }
    }

    /// All notifications this command would publish, in order.
    /// Flattens nested batches; handy for asserting on observable behavior.
    pub fn notifications(&self) -> Vec<&Notification> {
        let mut out = Vec::new();
        self.collect_notifications(&mut out);
        out
    }

    fn collect_notifications<'a>(&'a self, out: &mut Vec<&'a Notification>) {
        match self {
            Cmd::Publish(n) => out.push(n),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_notifications(out);
                }
            }
            _ => {}
        }
    }

    /// True if this command (or any batched sub-command) starts a timer
    pub fn starts_timer(&self) -> bool {
        match self {
            Cmd::StartDelayTimer { .. } | Cmd::StartIdleTimer { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.starts_timer()),
            _ => false,
        }
    }
}

impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Notification, RegionEvent};

    #[test]
    fn test_batch_flattens_trivial_cases() {
        assert!(matches!(Cmd::batch(vec![]), Cmd::None));
        assert!(matches!(Cmd::batch(vec![Cmd::None, Cmd::None]), Cmd::None));

        let single = Cmd::batch(vec![
            Cmd::None,
            Cmd::StartIdleTimer {
                region: RegionId(1),
                generation: 0,
                idle_ms: 100,
            },
        ]);
        assert!(matches!(single, Cmd::StartIdleTimer { .. }));
    }

    #[test]
    fn test_notifications_flattens_batches() {
        let region = RegionId(3);
        let cmd = Cmd::Batch(vec![
            Cmd::Publish(Notification::global(RegionEvent::Deactivated { region })),
            Cmd::Batch(vec![Cmd::Publish(Notification::global(
                RegionEvent::Activated {
                    region,
                    previous: None,
                },
            ))]),
        ]);
        let notes = cmd.notifications();
        assert_eq!(notes.len(), 2);
        assert!(matches!(notes[0].event, RegionEvent::Deactivated { .. }));
        assert!(matches!(notes[1].event, RegionEvent::Activated { .. }));
    }

    #[test]
    fn test_starts_timer() {
        assert!(!Cmd::None.starts_timer());
        let cmd = Cmd::Batch(vec![
            Cmd::None,
            Cmd::StartDelayTimer {
                region: RegionId(1),
                generation: 2,
                delay_ms: 1000,
            },
        ]);
        assert!(cmd.starts_timer());
    }
}
