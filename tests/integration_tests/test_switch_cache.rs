// per-dispatch switch-result caching

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use evact::{Dispatcher, SwitchEntry};

use crate::common::{count, counting_action, MockDom};

fn counting_switch(result: bool, dynamic: bool) -> (Arc<AtomicUsize>, SwitchEntry) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let entry = SwitchEntry::from_fn(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        result
    })
    .dynamic(dynamic);
    (calls, entry)
}

fn single_button_dom(attribute: &str) -> (MockDom, evact::ElementId, evact::ElementId) {
    let mut dom = MockDom::new();
    let body = dom.element("body");
    let button = dom.child(body, "button");
    dom.set_attribute(button, "data-click", attribute);
    (dom, body, button)
}

#[test]
fn test_static_switch_evaluates_once_for_same_param() {
    let (dom, body, button) = single_button_dom("switch:param? action && switch:param? action");

    let mut dispatcher = Dispatcher::new();
    let (action_calls, action) = counting_action();
    let (switch_calls, switch) = counting_switch(true, false);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("switch", switch);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);

    assert_eq!(count(&action_calls), 2);
    assert_eq!(count(&switch_calls), 1);
}

#[test]
fn test_static_switch_evaluates_per_distinct_param() {
    let (dom, body, button) = single_button_dom("switch:param1? action && switch:param2? action");

    let mut dispatcher = Dispatcher::new();
    let (action_calls, action) = counting_action();
    let (switch_calls, switch) = counting_switch(true, false);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("switch", switch);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);

    assert_eq!(count(&action_calls), 2);
    assert_eq!(count(&switch_calls), 2);
}

#[test]
fn test_dynamic_switch_evaluates_per_instruction() {
    let (dom, body, button) = single_button_dom("switch:param? action && switch:param? action");

    let mut dispatcher = Dispatcher::new();
    let (action_calls, action) = counting_action();
    let (switch_calls, switch) = counting_switch(true, true);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("switch", switch);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);

    assert_eq!(count(&action_calls), 2);
    assert_eq!(count(&switch_calls), 2);
}

#[test]
fn test_cache_lives_for_one_dispatch_only() {
    let (dom, body, button) = single_button_dom("switch? action");

    let mut dispatcher = Dispatcher::new();
    let (_, action) = counting_action();
    let (switch_calls, switch) = counting_switch(true, false);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("switch", switch);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);
    dispatcher.dispatch(&dom, &event);

    // fresh cache per dispatch: one evaluation each
    assert_eq!(count(&switch_calls), 2);
}

#[test]
fn test_negated_reference_reuses_cached_raw_result() {
    let (dom, body, button) = single_button_dom("switch? action && !switch ? action");

    let mut dispatcher = Dispatcher::new();
    let (action_calls, action) = counting_action();
    let (switch_calls, switch) = counting_switch(true, false);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("switch", switch);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);

    // the raw result is cached once; negation applies per reference
    assert_eq!(count(&switch_calls), 1);
    assert_eq!(count(&action_calls), 1);
}

#[test]
fn test_failing_switch_short_circuits_the_chain() {
    let (dom, body, button) = single_button_dom("first? second? action");

    let mut dispatcher = Dispatcher::new();
    let (action_calls, action) = counting_action();
    let (first_calls, first) = counting_switch(false, false);
    let (second_calls, second) = counting_switch(true, false);
    dispatcher.register_action("action", action);
    dispatcher.register_switch("first", first);
    dispatcher.register_switch("second", second);

    let event = dom.event("click", button, body);
    dispatcher.dispatch(&dom, &event);

    assert_eq!(count(&first_calls), 1);
    assert_eq!(count(&second_calls), 0);
    assert_eq!(count(&action_calls), 0);
}
