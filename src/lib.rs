//! Editable-region lifecycle engine with smart content change detection
//!
//! Hosts mirror their document into the [`model::Dom`], bind elements as
//! editable regions, and feed raw input events in as messages. The engine
//! manages the region lifecycle (initialization, the single active region,
//! teardown) and classifies edits into debounced semantic change
//! notifications published on a scoped bus.
//!
//! The architecture is Elm-style: messages go into [`update::update`], which
//! mutates the [`model::EditorModel`] and returns [`Cmd`] side effects; the
//! [`runtime::Driver`] executes those (notification delivery plus the two
//! change-detection timers).

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod events;
pub mod messages;
pub mod model;
pub mod plugins;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

pub use commands::Cmd;
pub use config::Settings;
pub use events::{Notification, RegionEvent, Scope, SmartChange, Trigger};
pub use messages::{InputMsg, KeyInput, Modifiers, Msg, RegionMsg, SourceEvent, SourceKind, TimerMsg};
pub use model::{
    Dom, EditorModel, Element, ElementId, ElementKind, ElementRole, RegionId, SelectionState,
};
pub use runtime::Driver;
pub use update::update;
