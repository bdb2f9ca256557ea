//! Runtime driver: executes commands and delivers timer firings
//!
//! The driver owns the model and a message channel. Updates run on the
//! caller's thread; the only background work is sleeping for the two
//! change-detection timers, each on a throwaway thread that sends its
//! `TimerMsg` back through the channel. Stale firings are filtered in the
//! update layer by generation, so timer threads never need cancelling.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::commands::Cmd;
use crate::events::Notification;
use crate::messages::{Msg, TimerMsg};
use crate::model::EditorModel;
use crate::update;

/// Callback registered on the notification bus
pub type Subscriber = Box<dyn FnMut(&Notification)>;

/// Owns the model, runs updates, executes commands
pub struct Driver {
    model: EditorModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    subscribers: Vec<Subscriber>,
}

impl Driver {
    pub fn new(model: EditorModel) -> Self {
        let (msg_tx, msg_rx) = channel();
        Self {
            model,
            msg_tx,
            msg_rx,
            subscribers: Vec::new(),
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut EditorModel {
        &mut self.model
    }

    /// A sender for feeding messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Register a notification subscriber
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Run one update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update::update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Publish(notification) => {
                for subscriber in &mut self.subscribers {
                    subscriber(&notification);
                }
            }
            Cmd::StartDelayTimer {
                region,
                generation,
                delay_ms,
            } => {
                let tx = self.msg_tx.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Timer(TimerMsg::DelayElapsed { region, generation }));
                });
            }
            Cmd::StartIdleTimer {
                region,
                generation,
                idle_ms,
            } => {
                let tx = self.msg_tx.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(idle_ms));
                    let _ = tx.send(Msg::Timer(TimerMsg::IdleElapsed { region, generation }));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Drain and dispatch all queued messages, returning how many ran
    pub fn pump(&mut self) -> usize {
        let mut count = 0;
        loop {
            let msg = match self.msg_rx.try_recv() {
                Ok(msg) => msg,
                Err(_) => break,
            };
            self.dispatch(msg);
            count += 1;
        }
        count
    }

    /// Wait up to `timeout` for one queued message and dispatch it.
    /// Returns false if the timeout elapsed with nothing to run.
    pub fn pump_blocking(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}
