use std::fmt;

use serde_json::Value;

use crate::store::{FieldStore, is_truthy, strict_eq};

use super::{BindingKind, ChangeEvent, EventBinding, EventCallback, GROUP_SUFFIX};

/// Chosen from the field name when the binding is created and fixed after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxMode {
    /// The field stores a boolean.
    Single,
    /// The field stores an array of the checked choices.
    Group,
}

impl CheckboxMode {
    pub fn for_name(name: &str) -> Self {
        if name.ends_with(GROUP_SUFFIX) {
            CheckboxMode::Group
        } else {
            CheckboxMode::Single
        }
    }
}

pub struct CheckboxBinding {
    name: String,
    choice: Value,
    mode: CheckboxMode,
    on_change: Option<EventCallback>,
}

impl CheckboxBinding {
    pub(super) fn new(name: impl Into<String>, choice: Value) -> Self {
        let name = name.into();
        let mode = CheckboxMode::for_name(&name);
        Self {
            name,
            choice,
            mode,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn mode(&self) -> CheckboxMode {
        self.mode
    }

    pub fn choice(&self) -> &Value {
        &self.choice
    }

    pub fn checked(&self, store: &FieldStore) -> bool {
        let current = store.value(&self.name);
        match self.mode {
            CheckboxMode::Single => current.is_some_and(is_truthy),
            CheckboxMode::Group => current
                .and_then(Value::as_array)
                .is_some_and(|items| items.iter().any(|item| strict_eq(item, &self.choice))),
        }
    }

    fn toggled_group(&self, store: &FieldStore, checked: bool) -> Vec<Value> {
        let mut items = store
            .value(&self.name)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if checked {
            items.push(self.choice.clone());
        } else if let Some(index) = items.iter().position(|item| strict_eq(item, &self.choice)) {
            items.remove(index);
        }
        items
    }
}

impl EventBinding for CheckboxBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BindingKind {
        match self.mode {
            CheckboxMode::Single => BindingKind::Checkbox,
            CheckboxMode::Group => BindingKind::CheckboxGroup,
        }
    }

    fn handle_change(&mut self, store: &mut FieldStore, event: &ChangeEvent) {
        let next = match self.mode {
            CheckboxMode::Single => Value::Bool(event.checked),
            CheckboxMode::Group => Value::Array(self.toggled_group(store, event.checked)),
        };
        store.set_value(self.name.as_str(), next);
        if let Some(callback) = self.on_change.as_mut() {
            callback(event);
        }
    }
}

impl fmt::Debug for CheckboxBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxBinding")
            .field("name", &self.name)
            .field("choice", &self.choice)
            .field("mode", &self.mode)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
