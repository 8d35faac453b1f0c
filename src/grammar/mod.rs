//! attribute-string grammar
//!
//! turns one attribute value into an ordered list of [`ParsedAction`]s:
//! - string grammar: `switch:param? !switch? ||action:param && ...`
//! - JSON-array form for typed/verbatim params
//!
//! parsing is pure and never fails; malformed input degrades to instructions
//! the engine skips.

mod parser;
mod types;

pub use parser::{parse_action_name, parse_actions, parse_segment, parse_switch_name};
pub use types::{ParsedAction, ParsedSwitch};
