use std::{cell::RefCell, rc::Rc};

use formstate::{BindingKind, CheckboxMode, prelude::*};
use serde_json::{Value, json};

fn store(initial: Value) -> FieldStore {
    FieldStore::from_value(initial).expect("object root")
}

#[test]
fn tag_group_toggles() {
    let mut store = store(json!({"tags[]": []}));
    let mut x = store.checkbox("tags[]", "x");
    assert_eq!(x.kind(), BindingKind::CheckboxGroup);

    x.handle_change(&mut store, &ChangeEvent::toggle(true));
    assert!(x.checked(&store));
    assert_eq!(store.values()["tags[]"], json!(["x"]));

    x.handle_change(&mut store, &ChangeEvent::toggle(false));
    assert!(!x.checked(&store));
    assert_eq!(store.values()["tags[]"], json!([]));
}

#[test]
fn toggle_round_trip_preserves_other_choices() {
    let mut store = store(json!({"tags[]": ["a", "b", "c"]}));
    let mut d = store.checkbox("tags[]", "d");
    let mut b = store.checkbox("tags[]", "b");

    d.handle_change(&mut store, &ChangeEvent::toggle(true));
    d.handle_change(&mut store, &ChangeEvent::toggle(false));
    assert_eq!(store.values()["tags[]"], json!(["a", "b", "c"]));
    assert!(!store.is_dirty("tags[]"));

    b.handle_change(&mut store, &ChangeEvent::toggle(false));
    b.handle_change(&mut store, &ChangeEvent::toggle(true));
    assert_eq!(store.values()["tags[]"], json!(["a", "c", "b"]));
    assert!(store.is_dirty("tags[]"));
}

#[test]
fn group_starts_empty_when_absent() {
    let mut store = store(json!({}));
    let mut red = store.checkbox("colors[]", "red");
    assert!(!red.checked(&store));
    red.handle_change(&mut store, &ChangeEvent::toggle(true));
    assert_eq!(store.values()["colors[]"], json!(["red"]));
    assert!(store.is_dirty("colors[]"));
}

#[test]
fn checkbox_mode_is_fixed_per_binding() {
    let store = FieldStore::default();
    assert_eq!(store.checkbox("agree", true).mode(), CheckboxMode::Single);
    assert_eq!(store.checkbox("opts[]", "a").mode(), CheckboxMode::Group);
}

#[test]
fn callbacks_run_after_the_store_update() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut store = store(json!({}));
    let sink = Rc::clone(&seen);
    let mut name = store
        .text("name")
        .with_on_change(move |event| sink.borrow_mut().push(event.value.clone()));

    name.handle_change(&mut store, &ChangeEvent::input("Bob"));
    assert_eq!(*seen.borrow(), vec!["Bob".to_string()]);
    assert_eq!(name.value(&store), &json!("Bob"));
}

#[test]
fn raw_callback_receives_plain_value() {
    let seen: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
    let mut store = store(json!({}));
    let sink = Rc::clone(&seen);
    let mut picker = store
        .raw("date")
        .with_on_change(move |value| *sink.borrow_mut() = Some(value.clone()));

    picker.handle_value(&mut store, json!({"y": 2024, "m": 1}));
    assert_eq!(*seen.borrow(), Some(json!({"y": 2024, "m": 1})));
    assert_eq!(picker.value(&store), Some(&json!({"y": 2024, "m": 1})));
}

#[test]
fn listener_fires_before_handler_returns() {
    let refreshes = Rc::new(RefCell::new(0usize));
    let mut store = store(json!({}));
    let counter = Rc::clone(&refreshes);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    let mut radio = store.radio("size", "m");
    radio.handle_change(&mut store, &ChangeEvent::input("m"));
    assert_eq!(*refreshes.borrow(), 1);
    assert!(radio.checked(&store));
}

#[test]
fn bindings_always_read_latest_values() {
    let mut store = store(json!({"name": "Alice"}));
    let first = store.text("name");
    store.set_value("name", json!("Bob"));
    let second = store.text("name");
    assert_eq!(first.value(&store), &json!("Bob"));
    assert_eq!(second.value(&store), &json!("Bob"));
    store.clear("name");
    assert_eq!(first.display_value(&store), "");
}
