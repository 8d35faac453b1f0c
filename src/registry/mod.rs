//! named handler registries
//!
//! two mutable tables map action and switch names to their registered
//! handlers. registration enforces the override discipline (an existing entry
//! is only replaced when it is overridable AND the caller confirms the
//! override) and the naming convention: grammar markers (`||`, `!`) belong in
//! attributes, not in registered names. a `!`-prefixed switch registration is
//! accepted with a warning by wrapping the handler in a negation under the
//! stripped name.
//!
//! diagnostics are advisory stderr warnings; registration never fails hard.

mod actions;
mod builtin;
mod context;
mod switches;

pub use actions::{ActionEntry, ActionHandler, GenerateDataFn};
pub use context::{ActionCtx, ActionData, ActionOutcome, SwitchCtx};
pub use switches::{SwitchEntry, SwitchHandler};

pub(crate) use actions::RegisteredAction;
pub(crate) use switches::RegisteredSwitch;

use std::collections::HashMap;
use std::sync::Arc;

use crate::grammar::{parse_action_name, parse_switch_name};

/// action and switch tables owned by one dispatcher, pre-seeded with the
/// built-ins
pub struct Registry {
    actions: HashMap<String, RegisteredAction>,
    switches: HashMap<String, RegisteredSwitch>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Registry {
    /// registry seeded with the built-in actions and switches
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            actions: HashMap::new(),
            switches: HashMap::new(),
        };
        registry.register_actions(builtin::default_actions());
        registry.register_switches(builtin::default_switches());
        registry
    }

    /// register one action under `name`
    pub fn register_action(&mut self, name: &str, entry: ActionEntry) -> &mut Self {
        self.install_action(name, entry, None);
        self
    }

    /// register several actions
    pub fn register_actions<N, I>(&mut self, entries: I) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, ActionEntry)>,
    {
        for (name, entry) in entries {
            self.install_action(name.as_ref(), entry, None);
        }
        self
    }

    /// register several actions with a shared default generate-data hook,
    /// applied to entries that do not carry their own
    pub fn register_actions_with<N, I>(&mut self, entries: I, generate: GenerateDataFn) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, ActionEntry)>,
    {
        for (name, entry) in entries {
            self.install_action(name.as_ref(), entry, Some(generate.clone()));
        }
        self
    }

    /// register one switch under `name`
    pub fn register_switch(&mut self, name: &str, entry: SwitchEntry) -> &mut Self {
        self.install_switch(name, entry);
        self
    }

    /// register several switches
    pub fn register_switches<N, I>(&mut self, entries: I) -> &mut Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, SwitchEntry)>,
    {
        for (name, entry) in entries {
            self.install_switch(name.as_ref(), entry);
        }
        self
    }

    fn install_action(&mut self, name: &str, entry: ActionEntry, default_generate: Option<GenerateDataFn>) {
        let (stored_name, has_or) = parse_action_name(name);

        if let Some(existing) = self.actions.get(&stored_name) {
            if !existing.overridable {
                eprintln!(
                    "warning: action ({}) is already registered and cannot be overridden",
                    stored_name
                );
                return;
            }
            if !entry.override_existing {
                eprintln!(
                    "warning: action ({}) is already registered; set override_existing to replace it",
                    stored_name
                );
                return;
            }
        }

        if has_or {
            eprintln!(
                "warning: action name must not start with (||), it marks OR behavior in attributes; registering as ({})",
                stored_name
            );
        }

        self.actions.insert(
            stored_name,
            RegisteredAction {
                handler: entry.handler,
                generate_data: entry.generate_data.or(default_generate),
                overridable: entry.overridable,
            },
        );
    }

    fn install_switch(&mut self, name: &str, entry: SwitchEntry) {
        let (stored_name, is_negated) = parse_switch_name(name);

        if let Some(existing) = self.switches.get(&stored_name) {
            if !existing.overridable {
                eprintln!(
                    "warning: switch ({}) is already registered and cannot be overridden",
                    stored_name
                );
                return;
            }
            if !entry.override_existing {
                eprintln!(
                    "warning: switch ({}) is already registered; set override_existing to replace it",
                    stored_name
                );
                return;
            }
        }

        let mut handler = entry.handler;
        if is_negated {
            eprintln!(
                "warning: switch name must not start with (!), it negates switches in attributes; \
                 registering a negated handler as ({})",
                stored_name
            );
            let inner = handler;
            handler = Arc::new(move |ctx: &SwitchCtx<'_>| !inner(ctx));
        }

        self.switches.insert(
            stored_name,
            RegisteredSwitch {
                handler,
                overridable: entry.overridable,
                dynamic: entry.dynamic,
            },
        );
    }

    pub(crate) fn action(&self, name: &str) -> Option<&RegisteredAction> {
        self.actions.get(name)
    }

    pub(crate) fn switch(&self, name: &str) -> Option<&RegisteredSwitch> {
        self.switches.get(name)
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.contains_key(name)
    }
}
