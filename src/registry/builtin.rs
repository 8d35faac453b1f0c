//! built-in actions and switches seeded into every registry
//!
//! actions: `#prevent`, `#stop`, `#nothing`, `#debug`, `#log` (all
//! non-overridable). switches: `#key`, `#special-key` (non-overridable) and
//! `#modifier` (overridable, dynamic).

use serde_json::Value;

use super::actions::ActionEntry;
use super::switches::SwitchEntry;
use crate::dom::EventDetail;

/// render a param for log output: strings verbatim, everything else as JSON
fn param_text(param: &Value) -> String {
    match param {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn default_actions() -> Vec<(&'static str, ActionEntry)> {
    vec![
        (
            "#prevent",
            ActionEntry::from_fn(|data| data.ctx.event.prevent_default()).overridable(false),
        ),
        (
            "#stop",
            ActionEntry::from_fn(|data| data.ctx.event.stop_propagation()).overridable(false),
        ),
        ("#nothing", ActionEntry::from_fn(|_| {}).overridable(false)),
        (
            "#debug",
            ActionEntry::from_fn(|data| println!("{:?}", data)).overridable(false),
        ),
        (
            "#log",
            ActionEntry::from_fn(|data| {
                let ctx = data.ctx;
                match ctx.action_param {
                    Value::String(s) if s.is_empty() => {
                        let switches = ctx
                            .parsed_action
                            .switches
                            .iter()
                            .map(|s| match &s.param {
                                Value::String(p) if p.is_empty() => s.name.clone(),
                                p => format!("{}:{}", s.name, param_text(p)),
                            })
                            .collect::<Vec<_>>()
                            .join(", ");
                        println!(
                            "({}) event dispatched by ({}) element{} with switches({})",
                            ctx.event_name,
                            ctx.dom.tag_name(ctx.matched_target),
                            if ctx.parsed_action.has_or {
                                " (with or action type)"
                            } else {
                                ""
                            },
                            switches
                        );
                    }
                    param => println!("{}", param_text(param)),
                }
            })
            .overridable(false),
        ),
    ]
}

pub(crate) fn default_switches() -> Vec<(&'static str, SwitchEntry)> {
    vec![
        (
            "#key",
            SwitchEntry::from_fn(|ctx| {
                let Some(key) = ctx.event.keyboard() else {
                    return false;
                };

                let keys: Vec<String> = match ctx.switch_param {
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect(),
                    // `Space` names the space key; an empty piece names `,`
                    Value::String(raw) => raw
                        .replace("Space", " ")
                        .split(',')
                        .map(|k| if k.is_empty() { ",".to_string() } else { k.to_string() })
                        .collect(),
                    _ => return false,
                };

                !keys.is_empty() && keys.iter().any(|k| *k == key.key)
            })
            .overridable(false),
        ),
        (
            "#special-key",
            SwitchEntry::from_fn(|ctx| {
                let Some(key) = ctx.event.keyboard() else {
                    return false;
                };
                match ctx.switch_param.as_str() {
                    Some("ctrl") => key.ctrl,
                    Some("alt") => key.alt,
                    Some("shift") => key.shift,
                    Some("meta") => key.meta,
                    _ => false,
                }
            })
            .overridable(false),
        ),
        (
            "#modifier",
            // reads the ACTION param, and stays dynamic: modifier state is
            // live input that must not be reused across instructions
            SwitchEntry::from_fn(|ctx| {
                let modifiers: Vec<String> = match ctx.action_param {
                    Value::String(raw) => raw.split(',').map(str::to_string).collect(),
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect(),
                    _ => Vec::new(),
                };

                if modifiers.is_empty() || matches!(ctx.event.detail(), EventDetail::None) {
                    return false;
                }

                modifiers.iter().any(|m| ctx.event.modifier_state(m))
            })
            .overridable(true)
            .dynamic(true),
        ),
    ]
}
