//! parsed instruction types
//!
//! a [`ParsedAction`] is one `&&`-delimited segment of an attribute string:
//! an optional action name with parameter, an OR flag, and the ordered
//! switches guarding it. params are `serde_json::Value` because the custom
//! JSON-array form carries params of any JSON type; string-grammar params are
//! always trimmed strings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// one parsed switch guard: `!name:param?` in the string grammar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedSwitch {
    /// switch name with the negation marker stripped
    pub name: String,
    /// switch parameter; `""` when absent
    pub param: Value,
    /// true when the name was written with a leading `!`
    pub is_negated: bool,
}

impl Default for ParsedSwitch {
    fn default() -> Self {
        Self {
            name: String::new(),
            param: Value::String(String::new()),
            is_negated: false,
        }
    }
}

impl ParsedSwitch {
    pub fn new(name: impl Into<String>, param: impl Into<Value>, is_negated: bool) -> Self {
        Self {
            name: name.into(),
            param: param.into(),
            is_negated,
        }
    }
}

/// one parsed instruction produced from one `&&`-delimited segment
///
/// an empty `name` means "no action, switches only"; the engine skips such
/// instructions but their switches stay inspectable. the OR and negation
/// markers never survive into names, they are recorded as flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedAction {
    /// action name with the OR marker stripped; `""` for no action
    pub name: String,
    /// action parameter; `""` when absent
    pub param: Value,
    /// true when the name was written with a leading `||`
    pub has_or: bool,
    /// guards evaluated left to right before the action runs
    pub switches: Vec<ParsedSwitch>,
}

impl Default for ParsedAction {
    fn default() -> Self {
        Self {
            name: String::new(),
            param: Value::String(String::new()),
            has_or: false,
            switches: Vec::new(),
        }
    }
}

impl ParsedAction {
    /// instruction with a name and no param or switches
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// true when this segment carries neither an action nor switches
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.switches.is_empty()
    }
}

fn write_param(f: &mut fmt::Formatter<'_>, param: &Value) -> fmt::Result {
    match param {
        Value::String(s) if s.is_empty() => Ok(()),
        Value::String(s) => write!(f, ":{}", s),
        other => write!(f, ":{}", other),
    }
}

/// canonical string-grammar rendition of one segment
///
/// re-parsing the output yields an equal structure for instructions that came
/// from the string grammar; JSON-typed params render with their JSON syntax
/// and are not guaranteed to round-trip.
impl fmt::Display for ParsedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for switch in &self.switches {
            if switch.is_negated {
                write!(f, "!")?;
            }
            write!(f, "{}", switch.name)?;
            write_param(f, &switch.param)?;
            write!(f, "?")?;
        }
        if self.has_or {
            write!(f, "||")?;
        }
        write!(f, "{}", self.name)?;
        write_param(f, &self.param)
    }
}
