//! dispatch diagnostics

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dom::ElementId;
use crate::grammar::ParsedAction;

/// diagnostic snapshot of one dispatch, returned for introspection
///
/// dispatch never throws; inspecting this object is how callers observe what
/// actually ran.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    /// element that carried the attribute
    pub matched_target: ElementId,
    /// attribute the instructions came from, e.g. `data-click`
    pub attribute_name: String,
    /// every instruction parsed from the attribute (memoized list)
    pub parsed_actions: Arc<Vec<ParsedAction>>,
    /// instructions whose switches passed and whose handler ran, in order
    pub executed_actions: Vec<ParsedAction>,
    pub timestamp: DateTime<Utc>,
}
