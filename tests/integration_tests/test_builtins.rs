// built-in switch behavior through full dispatch

use evact::dom::{EventDetail, KeyInput};
use evact::Dispatcher;

use crate::common::{count, counting_action, MockDom};

fn keyboard(key: &str) -> KeyInput {
    KeyInput {
        key: key.to_string(),
        ..KeyInput::default()
    }
}

fn key_dom(attribute: &str) -> (MockDom, evact::ElementId, evact::ElementId) {
    let mut dom = MockDom::new();
    let body = dom.element("body");
    let input = dom.child(body, "input");
    dom.set_attribute(input, "data-keyup", attribute);
    (dom, body, input)
}

#[test]
fn test_key_switch_matches_listed_keys() {
    let (dom, body, input) = key_dom("#key:Enter,Escape? action");

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard("Enter")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard("a")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);
}

#[test]
fn test_key_switch_space_and_comma_spellings() {
    let (dom, body, input) = key_dom("#key:Space? action");

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard(" ")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);

    // an empty list piece names the comma key itself
    let (dom, body, input) = key_dom("#key:,? action");
    let (comma_calls, comma_entry) = counting_action();
    let mut dispatcher = Dispatcher::new();
    dispatcher.register_action("action", comma_entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard(",")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&comma_calls), 1);
}

#[test]
fn test_key_switch_accepts_json_array_param() {
    let (dom, body, input) = key_dom(r##"[["action", "", ["#key", ["Enter", "Tab"]]]]"##);

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard("Tab")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);
}

#[test]
fn test_key_switch_requires_keyboard_event() {
    let (dom, body, input) = key_dom("#key:Enter? action");

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    // no keyboard detail on the event: the guard fails
    let event = dom.event("keyup", input, body);
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 0);
}

#[test]
fn test_special_key_switch_reads_modifier_flags() {
    let (dom, body, input) = key_dom("#special-key:ctrl? action");

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(KeyInput {
            key: "s".to_string(),
            ctrl: true,
            ..KeyInput::default()
        }));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard("s")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);
}

#[test]
fn test_modifier_switch_reads_the_action_param() {
    let (dom, body, input) = key_dom("#modifier? action:Control,Alt");

    let mut dispatcher = Dispatcher::new();
    let (calls, entry) = counting_action();
    dispatcher.register_action("action", entry);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(KeyInput {
            key: "s".to_string(),
            alt: true,
            ..KeyInput::default()
        }));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);

    let event = dom
        .event("keyup", input, body)
        .with_detail(EventDetail::Keyboard(keyboard("s")));
    dispatcher.dispatch(&dom, &event);
    assert_eq!(count(&calls), 1);
}

#[test]
fn test_log_and_debug_builtins_run() {
    let mut dom = MockDom::new();
    let body = dom.element("body");
    let button = dom.child(body, "button");
    dom.set_attribute(button, "data-click", "#log:hello && #debug && #log && #nothing");

    let mut dispatcher = Dispatcher::new();
    let event = dom.event("click", button, body);
    let outcome = dispatcher.dispatch(&dom, &event).unwrap();
    assert_eq!(outcome.executed_actions.len(), 4);
}
