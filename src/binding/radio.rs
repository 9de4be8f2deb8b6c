use std::fmt;

use serde_json::Value;

use crate::store::{FieldStore, strict_eq};

use super::{BindingKind, ChangeEvent, EventBinding, EventCallback};

/// One option of a single-choice group.
///
/// The handler stores the event's raw value rather than `choice`, so the
/// rendered control must carry `choice` as its value for `checked` to agree.
pub struct RadioBinding {
    name: String,
    choice: Value,
    on_change: Option<EventCallback>,
}

impl RadioBinding {
    pub(super) fn new(name: impl Into<String>, choice: Value) -> Self {
        Self {
            name: name.into(),
            choice,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn choice(&self) -> &Value {
        &self.choice
    }

    pub fn checked(&self, store: &FieldStore) -> bool {
        store
            .value(&self.name)
            .is_some_and(|current| strict_eq(current, &self.choice))
    }
}

impl EventBinding for RadioBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BindingKind {
        BindingKind::Radio
    }

    fn handle_change(&mut self, store: &mut FieldStore, event: &ChangeEvent) {
        store.set_value(self.name.as_str(), Value::String(event.value.clone()));
        if let Some(callback) = self.on_change.as_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for RadioBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioBinding")
            .field("name", &self.name)
            .field("choice", &self.choice)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
