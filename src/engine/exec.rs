//! instruction execution
//!
//! runs one parsed instruction list against the registry for a single event
//! occurrence. switches gate each instruction with AND semantics and
//! short-circuit on the first failure; non-dynamic switch results are cached
//! per (name, param) for the duration of the dispatch so repeated guards run
//! their handler once.
//!
//! an executed instruction with the OR flag stops the ENTIRE remaining list,
//! not just an OR-group ("first successful OR wins, nothing else runs this
//! dispatch"). this mirrors the long-standing observed behavior; see
//! DESIGN.md before changing it.

use std::collections::HashMap;

use serde_json::Value;

use crate::dom::{DomAdapter, ElementId, EventState};
use crate::grammar::{ParsedAction, ParsedSwitch};
use crate::registry::{ActionCtx, ActionData, Registry, SwitchCtx};

/// per-dispatch cache of raw (pre-negation) switch results
///
/// params are compared by value; each switch name holds a short list because
/// one attribute rarely repeats a switch with many distinct params.
#[derive(Default)]
struct SwitchResultCache {
    results: HashMap<String, Vec<(Value, bool)>>,
}

impl SwitchResultCache {
    fn get(&self, name: &str, param: &Value) -> Option<bool> {
        self.results
            .get(name)?
            .iter()
            .find(|(cached_param, _)| cached_param == param)
            .map(|(_, value)| *value)
    }

    fn insert(&mut self, name: &str, param: Value, value: bool) {
        self.results
            .entry(name.to_string())
            .or_default()
            .push((param, value));
    }
}

/// execute `parsed_actions` in order, returning the executed instructions
pub(crate) fn execute_parsed_actions(
    registry: &Registry,
    dom: &dyn DomAdapter,
    event: &EventState,
    event_name: &str,
    matched_target: ElementId,
    parsed_actions: &[ParsedAction],
) -> Vec<ParsedAction> {
    let mut cache = SwitchResultCache::default();
    let mut executed = Vec::new();

    for parsed in parsed_actions {
        if parsed.name.is_empty() {
            continue;
        }

        let Some(action) = registry.action(&parsed.name) else {
            eprintln!(
                "warning: no registered action named ({}) for event ({})",
                parsed.name, event_name
            );
            continue;
        };

        let switches_pass = parsed.switches.iter().all(|switch| {
            evaluate_switch(
                registry,
                &mut cache,
                dom,
                event,
                event_name,
                matched_target,
                parsed,
                switch,
            )
        });
        if !switches_pass {
            continue;
        }

        let ctx = ActionCtx {
            dom,
            event,
            matched_target,
            event_name,
            action_param: &parsed.param,
            parsed_action: parsed,
        };
        let generated = action.generate_data.as_ref().map(|generate| generate(&ctx));

        // a detached handle is dropped here, never awaited
        let _ = (action.handler)(ActionData {
            ctx: &ctx,
            generated,
        });

        executed.push(parsed.clone());

        if parsed.has_or {
            break;
        }
    }

    executed
}

#[allow(clippy::too_many_arguments)]
fn evaluate_switch(
    registry: &Registry,
    cache: &mut SwitchResultCache,
    dom: &dyn DomAdapter,
    event: &EventState,
    event_name: &str,
    matched_target: ElementId,
    parsed: &ParsedAction,
    switch: &ParsedSwitch,
) -> bool {
    if let Some(raw) = cache.get(&switch.name, &switch.param) {
        return raw != switch.is_negated;
    }

    let Some(registered) = registry.switch(&switch.name) else {
        eprintln!(
            "warning: no registered switch named ({}) for event ({})",
            switch.name, event_name
        );
        return false;
    };

    let ctx = SwitchCtx {
        dom,
        event,
        matched_target,
        event_name,
        action_param: &parsed.param,
        switch_param: &switch.param,
        action_name: &parsed.name,
        parsed_action: parsed,
    };
    let raw = (registered.handler)(&ctx);

    if !registered.dynamic {
        cache.insert(&switch.name, switch.param.clone(), raw);
    }

    raw != switch.is_negated
}
