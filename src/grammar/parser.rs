//! attribute-string grammar parser
//!
//! grammar for one attribute value:
//!
//! ```text
//! attribute   := json-array | segment ("&&" segment)*
//! segment     := (switch "?")* action-spec?
//! switch      := "!"? name (":" param)?
//! action-spec := "||"? name (":" param)?
//! ```
//!
//! the `?` that ends the switch section is the LAST `?` in the segment, and
//! an action param starts at the last `:` after it. parsing never fails:
//! malformed input degrades to instructions with empty names, which the
//! engine skips.
//!
//! a JSON-array attribute is the escape hatch for params that need their
//! whitespace or JSON type preserved: each element is a plain grammar string,
//! a `[name, param, ...switches]` tuple, or an already-structured instruction
//! object. elements of any other shape are dropped.

use serde_json::Value;

use super::types::{ParsedAction, ParsedSwitch};
use crate::json;

/// parse a whole attribute value into an ordered instruction list
pub fn parse_actions(attribute: &str) -> Vec<ParsedAction> {
    if let Some(Value::Array(items)) = json::parse_or_none(attribute) {
        return items.iter().filter_map(parse_json_item).collect();
    }

    attribute.split("&&").map(parse_segment).collect()
}

fn parse_json_item(item: &Value) -> Option<ParsedAction> {
    match item {
        Value::String(segment) => Some(parse_segment(segment)),
        Value::Array(tuple) => parse_json_tuple(tuple),
        Value::Object(_) => serde_json::from_value(item.clone()).ok(),
        _ => None,
    }
}

/// `[name]`, `[name, param]` or `[name, param, ...switchSpecs]`
///
/// tuple params keep their JSON type and whitespace verbatim; names are still
/// trimmed and marker-stripped like in the string grammar
fn parse_json_tuple(tuple: &[Value]) -> Option<ParsedAction> {
    let head = tuple.first()?.as_str()?;

    if tuple.len() == 1 {
        return Some(parse_segment(head));
    }

    let (name, has_or) = parse_action_name(head);
    let param = tuple[1].clone();
    let switches = tuple[2..].iter().map(parse_json_switch_spec).collect();

    Some(ParsedAction {
        name,
        param,
        has_or,
        switches,
    })
}

/// a switch spec inside a tuple: `[name, param]` or `"name:param"`
fn parse_json_switch_spec(spec: &Value) -> ParsedSwitch {
    let (raw_name, param) = match spec {
        Value::Array(pair) => (
            pair.first().and_then(Value::as_str).unwrap_or("").to_string(),
            pair.get(1).cloned().unwrap_or_else(|| Value::String(String::new())),
        ),
        Value::String(s) => {
            let mut pieces = s.split(':');
            let name = pieces.next().unwrap_or("").to_string();
            let param = pieces.next().unwrap_or("").to_string();
            (name, Value::String(param))
        }
        _ => (String::new(), Value::String(String::new())),
    };

    let (name, is_negated) = parse_switch_name(&raw_name);
    ParsedSwitch {
        name,
        param,
        is_negated,
    }
}

/// parse one `&&`-delimited segment of the string grammar
pub fn parse_segment(segment: &str) -> ParsedAction {
    let collapsed = segment.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return ParsedAction::default();
    }

    let switch_index = collapsed.rfind('?');
    // a `:` before the last `?` belongs to a switch, not the action
    let param_index = collapsed
        .rfind(':')
        .filter(|&p| switch_index.map_or(true, |s| p > s));

    let name_start = switch_index.map_or(0, |s| s + 1);
    let name_end = param_index.unwrap_or(collapsed.len());
    let (name, has_or) = parse_action_name(&collapsed[name_start..name_end]);

    let param = param_index
        .map_or("", |p| collapsed[p + 1..].trim())
        .to_string();

    let mut switches = Vec::new();
    if let Some(end) = switch_index {
        for piece in collapsed[..end].split('?') {
            // first `:` separates a switch name from its param
            let (raw_name, raw_param) = match piece.find(':') {
                Some(i) => (&piece[..i], &piece[i + 1..]),
                None => (piece, ""),
            };
            let (name, is_negated) = parse_switch_name(raw_name);
            switches.push(ParsedSwitch {
                name,
                param: Value::String(raw_param.trim().to_string()),
                is_negated,
            });
        }
    }

    ParsedAction {
        name,
        param: Value::String(param),
        has_or,
        switches,
    }
}

/// trim an action name and strip the `||` OR marker
pub fn parse_action_name(name: &str) -> (String, bool) {
    let trimmed = name.trim();
    match trimmed.strip_prefix("||") {
        Some(rest) => (rest.to_string(), true),
        None => (trimmed.to_string(), false),
    }
}

/// trim a switch name and strip the `!` negation marker
pub fn parse_switch_name(name: &str) -> (String, bool) {
    let trimmed = name.trim();
    match trimmed.strip_prefix('!') {
        Some(rest) => (rest.to_string(), true),
        None => (trimmed.to_string(), false),
    }
}
