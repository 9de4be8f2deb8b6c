use formstate::{ChangeEvent, EventBinding, FieldStore};
use proptest::prelude::*;
use serde_json::{Value, json};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        "[a-c]{0,2}".prop_map(Value::String),
        (-2i64..3).prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn repeated_write_matches_single_write(initial in scalar(), next in scalar()) {
        let mut once = FieldStore::from_value(json!({"f": initial.clone()})).unwrap();
        let mut twice = FieldStore::from_value(json!({"f": initial})).unwrap();
        once.set_value("f", next.clone());
        twice.set_value("f", next.clone());
        twice.set_value("f", next);
        prop_assert_eq!(once.dirty(), twice.dirty());
        prop_assert_eq!(once.touched(), twice.touched());
    }

    #[test]
    fn writing_baseline_back_is_clean(initial in scalar(), detour in scalar()) {
        prop_assume!(formstate::is_truthy(&initial));
        let mut store = FieldStore::from_value(json!({"f": initial.clone()})).unwrap();
        store.set_value("f", detour);
        store.set_value("f", initial);
        prop_assert!(!store.is_dirty("f"));
    }

    #[test]
    fn group_toggle_round_trip(items in proptest::collection::vec("[a-d]", 0..6), choice in "[a-e]") {
        let original = Value::from(items);
        let mut store = FieldStore::from_value(json!({"opts[]": original.clone()})).unwrap();
        let mut binding = store.checkbox("opts[]", choice.as_str());
        binding.handle_change(&mut store, &ChangeEvent::toggle(true));
        binding.handle_change(&mut store, &ChangeEvent::toggle(false));
        let current = store.value("opts[]").unwrap();
        // removal takes the first occurrence, so only multiset content survives
        let mut expected: Vec<String> = serde_json::from_value(original).unwrap();
        let mut actual: Vec<String> = serde_json::from_value(current.clone()).unwrap();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
