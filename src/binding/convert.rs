use serde_json::Value;

/// Render a stored value the way a text control displays it.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_arrays_and_keeps_objects_as_json() {
        assert_eq!(value_to_string(&json!(["a", 1, true])), "a, 1, true");
        assert_eq!(value_to_string(&json!({"k": "v"})), r#"{"k":"v"}"#);
        assert_eq!(value_to_string(&json!(null)), "");
    }
}
