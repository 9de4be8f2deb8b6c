use std::fmt;

use serde_json::Value;

use crate::store::FieldStore;

use super::{BindingKind, ValueBinding, ValueCallback};

/// Passes values through untouched, for controls that report plain values.
pub struct RawBinding {
    name: String,
    on_change: Option<ValueCallback>,
}

impl RawBinding {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&Value) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn value<'a>(&self, store: &'a FieldStore) -> Option<&'a Value> {
        store.value(&self.name)
    }
}

impl ValueBinding for RawBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BindingKind {
        BindingKind::Raw
    }

    fn handle_value(&mut self, store: &mut FieldStore, value: Value) {
        match self.on_change.as_mut() {
            Some(callback) => {
                store.set_value(self.name.as_str(), value.clone());
                callback(&value);
            }
            None => store.set_value(self.name.as_str(), value),
        }
    }
}

impl fmt::Debug for RawBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBinding")
            .field("name", &self.name)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
