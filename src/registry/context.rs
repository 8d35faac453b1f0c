//! data passed to action and switch handlers

use std::fmt;

use serde_json::Value;

use crate::dom::{DomAdapter, ElementId, EventState};
use crate::grammar::ParsedAction;

/// context for one action invocation
pub struct ActionCtx<'a> {
    /// host document, for structural queries from handlers
    pub dom: &'a dyn DomAdapter,
    /// the event being dispatched
    pub event: &'a EventState,
    /// element that carried the attribute
    pub matched_target: ElementId,
    pub event_name: &'a str,
    /// parameter written after the action name
    pub action_param: &'a Value,
    /// the full instruction, for introspection
    pub parsed_action: &'a ParsedAction,
}

impl fmt::Debug for ActionCtx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCtx")
            .field("matched_target", &self.matched_target)
            .field("event_name", &self.event_name)
            .field("action_param", &self.action_param)
            .field("parsed_action", &self.parsed_action)
            .finish_non_exhaustive()
    }
}

/// input to an action handler
///
/// `generated` holds the output of the action's generate-data hook when one
/// is registered, `None` otherwise.
#[derive(Debug)]
pub struct ActionData<'a> {
    pub ctx: &'a ActionCtx<'a>,
    pub generated: Option<Value>,
}

/// context for one switch evaluation
pub struct SwitchCtx<'a> {
    pub dom: &'a dyn DomAdapter,
    pub event: &'a EventState,
    pub matched_target: ElementId,
    pub event_name: &'a str,
    /// parameter of the action the switch guards
    pub action_param: &'a Value,
    /// parameter written after the switch name
    pub switch_param: &'a Value,
    /// name of the action the switch guards
    pub action_name: &'a str,
    pub parsed_action: &'a ParsedAction,
}

impl fmt::Debug for SwitchCtx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchCtx")
            .field("matched_target", &self.matched_target)
            .field("event_name", &self.event_name)
            .field("switch_param", &self.switch_param)
            .field("action_name", &self.action_name)
            .finish_non_exhaustive()
    }
}

/// value returned by an action handler
///
/// the engine never awaits a detached handle; it is dropped immediately and
/// the task keeps running on its own (fire-and-forget). there is no ordering
/// guarantee between the task and later instructions.
#[derive(Debug)]
pub enum ActionOutcome {
    /// handler finished synchronously
    Completed,
    /// handler spawned work it does not want the dispatch to wait for
    Detached(tokio::task::JoinHandle<()>),
}

impl From<()> for ActionOutcome {
    fn from(_: ()) -> Self {
        ActionOutcome::Completed
    }
}
