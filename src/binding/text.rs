use std::fmt;

use serde_json::Value;

use crate::store::{FieldStore, is_truthy};

use super::{BindingKind, ChangeEvent, EventBinding, EventCallback, value_to_string};

static EMPTY_TEXT: Value = Value::String(String::new());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

pub struct TextBinding {
    name: String,
    input_type: InputType,
    on_change: Option<EventCallback>,
}

impl TextBinding {
    pub(super) fn new(name: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            input_type,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Current value, or `""` when the field is absent or falsy.
    pub fn value<'a>(&self, store: &'a FieldStore) -> &'a Value {
        store
            .value(&self.name)
            .filter(|value| is_truthy(value))
            .unwrap_or(&EMPTY_TEXT)
    }

    pub fn display_value(&self, store: &FieldStore) -> String {
        value_to_string(self.value(store))
    }
}

impl EventBinding for TextBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BindingKind {
        match self.input_type {
            InputType::Text => BindingKind::Text,
            InputType::Email => BindingKind::Email,
        }
    }

    fn handle_change(&mut self, store: &mut FieldStore, event: &ChangeEvent) {
        store.set_value(self.name.as_str(), Value::String(event.value.clone()));
        if let Some(callback) = self.on_change.as_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for TextBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBinding")
            .field("name", &self.name)
            .field("input_type", &self.input_type)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
