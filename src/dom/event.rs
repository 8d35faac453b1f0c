//! host event snapshot
//!
//! one [`EventState`] describes a single native event occurrence: its type,
//! where listeners caught it, the propagation path, and input detail for the
//! key/modifier built-ins. the prevent/stop flags are interior-mutable so
//! `Fn` handlers can raise them; the host reads them back after dispatch.

use std::cell::Cell;

use chrono::{DateTime, Utc};

use super::{ElementId, PathNode};

/// keyboard input detail
#[derive(Debug, Clone, Default)]
pub struct KeyInput {
    /// key value, e.g. `"a"`, `"Enter"`, `" "`
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// extra active modifiers by name, e.g. `"CapsLock"`
    pub held_modifiers: Vec<String>,
}

/// pointer input detail
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pub button: i16,
    /// active modifiers by name, e.g. `"Control"`, `"Shift"`
    pub held_modifiers: Vec<String>,
}

/// input detail carried by an event, when any
#[derive(Debug, Clone, Default)]
pub enum EventDetail {
    Keyboard(KeyInput),
    Pointer(PointerInput),
    #[default]
    None,
}

/// snapshot of one native event occurrence
#[derive(Debug)]
pub struct EventState {
    name: String,
    current_target: ElementId,
    composed_path: Vec<PathNode>,
    detail: EventDetail,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
    timestamp: DateTime<Utc>,
}

impl EventState {
    pub fn new(name: impl Into<String>, current_target: ElementId) -> Self {
        Self {
            name: name.into(),
            current_target,
            composed_path: Vec::new(),
            detail: EventDetail::None,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
            timestamp: Utc::now(),
        }
    }

    /// set the propagation path, innermost node first
    pub fn with_path(mut self, path: Vec<PathNode>) -> Self {
        self.composed_path = path;
        self
    }

    pub fn with_detail(mut self, detail: EventDetail) -> Self {
        self.detail = detail;
        self
    }

    /// event type, e.g. `"click"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the element the listener was attached to
    pub fn current_target(&self) -> ElementId {
        self.current_target
    }

    /// propagation path, innermost node first
    pub fn composed_path(&self) -> &[PathNode] {
        &self.composed_path
    }

    pub fn detail(&self) -> &EventDetail {
        &self.detail
    }

    pub fn keyboard(&self) -> Option<&KeyInput> {
        match &self.detail {
            EventDetail::Keyboard(key) => Some(key),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<&PointerInput> {
        match &self.detail {
            EventDetail::Pointer(pointer) => Some(pointer),
            _ => None,
        }
    }

    /// true when the named modifier is active on a keyboard or pointer event
    pub fn modifier_state(&self, modifier: &str) -> bool {
        let (flags, held) = match &self.detail {
            EventDetail::Keyboard(key) => (
                [
                    ("Control", key.ctrl),
                    ("Alt", key.alt),
                    ("Shift", key.shift),
                    ("Meta", key.meta),
                ],
                &key.held_modifiers,
            ),
            EventDetail::Pointer(pointer) => (
                [
                    ("Control", false),
                    ("Alt", false),
                    ("Shift", false),
                    ("Meta", false),
                ],
                &pointer.held_modifiers,
            ),
            EventDetail::None => return false,
        };

        flags
            .iter()
            .any(|(name, active)| *active && *name == modifier)
            || held.iter().any(|name| name == modifier)
    }

    /// ask the host to suppress the event's default behavior
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// ask the host to stop further propagation
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
