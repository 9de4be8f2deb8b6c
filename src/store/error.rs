use serde_json::Value;

/// Raised when a store is seeded from a value whose root is not an object.
#[derive(Debug, Clone)]
pub struct InitialStateError {
    pub found: &'static str,
}

impl InitialStateError {
    pub(super) fn not_an_object(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self { found }
    }
}

impl std::fmt::Display for InitialStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "initial state must be an object, found {}", self.found)
    }
}

impl std::error::Error for InitialStateError {}
