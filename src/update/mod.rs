//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Raw host input is
//! gatekept in `input`, lifecycle transitions live in `lifecycle`, and the
//! smart-content-change classification plus timer handling in `change`.

pub mod change;
pub mod input;
pub mod lifecycle;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Region(m) => lifecycle::update_region(model, m),
        Msg::Input(m) => input::update_input(model, m),
        Msg::Timer(m) => change::update_timer(model, m),
    }
}
