//! memoized attribute parses
//!
//! parsing an attribute on every dispatch would be wasted work, so the first
//! parse per (element, event name) is kept until the element is evicted.
//! entries are NOT invalidated when the attribute string changes; detaching
//! the element's listeners (which evicts it) is the only way to pick up a new
//! attribute value.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dom::ElementId;
use crate::grammar::{parse_actions, ParsedAction};

/// per-element, per-event-name cache of parsed instruction lists
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: HashMap<ElementId, HashMap<String, Arc<Vec<ParsedAction>>>>,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// return the memoized list for `(el, event_name)`, parsing `attribute`
    /// on first access
    pub fn get_or_parse(
        &mut self,
        el: ElementId,
        event_name: &str,
        attribute: &str,
    ) -> Arc<Vec<ParsedAction>> {
        self.entries
            .entry(el)
            .or_default()
            .entry(event_name.to_string())
            .or_insert_with(|| Arc::new(parse_actions(attribute)))
            .clone()
    }

    /// drop every memoized event for `el`; true when something was removed
    pub fn evict(&mut self, el: ElementId) -> bool {
        self.entries.remove(&el).is_some()
    }

    pub fn contains(&self, el: ElementId) -> bool {
        self.entries.contains_key(&el)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
