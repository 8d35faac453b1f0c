//! declarative event-action dispatch driven by markup attributes
//!
//! elements carry an attribute string in a small grammar
//! (`switch:param? ||action:param && ...`); the [`Dispatcher`] parses it into
//! [`ParsedAction`]s and runs them against registries of named action and
//! switch handlers whenever a host event fires on a matched element.

pub mod config;
pub mod dom;
pub mod engine;
pub mod grammar;
pub mod json;
pub mod registry;

pub use config::EngineConfig;
pub use dom::{DomAdapter, ElementId, EventState, ListenerHost, PathNode};
pub use engine::{DispatchOutcome, Dispatcher};
pub use grammar::{ParsedAction, ParsedSwitch};
pub use registry::{
    ActionCtx, ActionData, ActionEntry, ActionOutcome, Registry, SwitchCtx, SwitchEntry,
};
