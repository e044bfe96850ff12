//! Property tests over randomly generated value trees.

use std::collections::BTreeMap;

use object_hash::{object_hash, redact, HashOptions, Value};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
        any::<i32>().prop_map(Value::from),
        (-1.0e12f64..1.0e12f64).prop_map(Value::Number),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(Value::Mapping),
        ]
    })
}

/// Rebuild every mapping by inserting its entries in reverse order.
fn reinsert_reversed(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(items.iter().map(reinsert_reversed).collect()),
        Value::Mapping(map) => {
            let mut rebuilt = BTreeMap::new();
            for (k, v) in map.iter().rev() {
                rebuilt.insert(k.clone(), reinsert_reversed(v));
            }
            Value::Mapping(rebuilt)
        }
        other => other.clone(),
    }
}

/// Reverse every sequence in the tree.
fn reverse_sequences(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => {
            Value::Sequence(items.iter().rev().map(reverse_sequences).collect())
        }
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), reverse_sequences(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn prop_deterministic(value in arb_value(), unordered in any::<bool>()) {
        let options = HashOptions::default().with_ignore_array_item_order(unordered);
        prop_assert_eq!(
            object_hash(&value, &options).unwrap(),
            object_hash(&value, &options).unwrap()
        );
    }

    #[test]
    fn prop_key_order_independent(value in arb_value()) {
        let options = HashOptions::default();
        prop_assert_eq!(
            object_hash(&value, &options).unwrap(),
            object_hash(&reinsert_reversed(&value), &options).unwrap()
        );
    }

    #[test]
    fn prop_unordered_ignores_sequence_order(value in arb_value()) {
        let options = HashOptions::unordered();
        prop_assert_eq!(
            object_hash(&value, &options).unwrap(),
            object_hash(&reverse_sequences(&value), &options).unwrap()
        );
    }

    #[test]
    fn prop_ordered_detects_swap(a in arb_scalar(), b in arb_scalar()) {
        let options = HashOptions::default();
        let da = object_hash(&a, &options).unwrap();
        let db = object_hash(&b, &options).unwrap();
        prop_assume!(da != db);

        let forward = Value::Sequence(vec![a.clone(), b.clone()]);
        let reverse = Value::Sequence(vec![b, a]);
        prop_assert_ne!(
            object_hash(&forward, &options).unwrap(),
            object_hash(&reverse, &options).unwrap()
        );
    }

    #[test]
    fn prop_redacted_subtree_preserves_digest(value in arb_value(), key in "[a-z]{1,6}") {
        let options = HashOptions::default();
        let whole = Value::mapping().with_entry(key.clone(), value.clone());
        let redacted = Value::mapping().with_entry(key, redact(&value, &options).unwrap());
        prop_assert_eq!(
            object_hash(&whole, &options).unwrap(),
            object_hash(&redacted, &options).unwrap()
        );
    }

    #[test]
    fn prop_integers_hash_as_floats(n in any::<i32>()) {
        let options = HashOptions::default();
        prop_assert_eq!(
            object_hash(&Value::from(n), &options).unwrap(),
            object_hash(&Value::Number(f64::from(n)), &options).unwrap()
        );
    }
}
