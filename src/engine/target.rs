//! matched-target resolution
//!
//! walks an event's propagation path (innermost node first) to find the
//! element that actually carries the dispatch attribute. the default walk is
//! bounded by containment in the listener's element; the pierce walk is
//! bounded by a shadow-piercing ancestor lookup instead, which is what makes
//! dispatch work across shadow roots.

use crate::dom::{DomAdapter, ElementId, EventState};

/// first element on the path, inside `current_target`, carrying the attribute
pub fn matched_target(
    dom: &dyn DomAdapter,
    event: &EventState,
    attribute_name: &str,
) -> Option<ElementId> {
    let current_target = event.current_target();

    for node in event.composed_path() {
        let Some(el) = node.element() else { continue };

        // past the listener's subtree: nothing further can match
        if !dom.contains(current_target, el) {
            break;
        }

        if dom.has_attribute(el, attribute_name) {
            return Some(el);
        }
    }

    None
}

/// like [`matched_target`], but bounds the walk with a shadow-piercing
/// closest-ancestor lookup against `curr_target_selector`
pub fn matched_target_pierce(
    dom: &dyn DomAdapter,
    event: &EventState,
    attribute_name: &str,
    curr_target_selector: &str,
) -> Option<ElementId> {
    for node in event.composed_path() {
        let Some(el) = node.element() else { continue };

        if dom.closest_pierce(curr_target_selector, el).is_none() {
            break;
        }

        if dom.has_attribute(el, attribute_name) {
            return Some(el);
        }
    }

    None
}
