//! JSON parse-or-none primitive
//!
//! the grammar treats JSON parsing as a fallible probe, never an error: an
//! attribute that does not parse as JSON is simply string-grammar input.

use serde_json::Value;

/// parse a string as JSON, returning `None` on any failure
pub fn parse_or_none(input: &str) -> Option<Value> {
    serde_json::from_str(input).ok()
}
