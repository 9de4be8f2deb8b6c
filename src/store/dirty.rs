use serde_json::{Number, Value};

/// Falsy values are `null`, `false`, `""` and numeric zero; everything else,
/// empty arrays and objects included, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A value that counts as "back to empty" for a field without a baseline.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Bool(flag) => !flag,
        _ => false,
    }
}

/// Scalar equality. Numbers compare by numeric value, so `1` equals `1.0`.
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        _ => left == right,
    }
}

/// Deep equality: arrays are order-sensitive, objects compare by key set and
/// per-key value regardless of insertion order.
pub fn structural_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| structural_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| structural_eq(x, y)))
        }
        _ => strict_eq(left, right),
    }
}

pub(super) fn differs_from_baseline(baseline: Option<&Value>, value: &Value) -> bool {
    match baseline.filter(|initial| is_truthy(initial)) {
        Some(initial) if is_structured(value) => !structural_eq(value, initial),
        Some(initial) => !strict_eq(value, initial),
        None => !is_blank(value),
    }
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Array(_) | Value::Object(_))
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
