mod checkbox;
mod convert;
mod radio;
mod raw;
mod text;

use serde_json::Value;

use crate::store::FieldStore;

pub use checkbox::{CheckboxBinding, CheckboxMode};
pub use convert::value_to_string;
pub use radio::RadioBinding;
pub use raw::RawBinding;
pub use text::{InputType, TextBinding};

/// Suffix marking a checkbox field as a multi-choice group stored as an array.
pub const GROUP_SUFFIX: &str = "[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Text,
    Email,
    Radio,
    Checkbox,
    CheckboxGroup,
    Raw,
}

/// The parts of a UI change event a binding reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
    pub checked: bool,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }

    pub fn input(value: impl Into<String>) -> Self {
        Self::new(value, false)
    }

    pub fn toggle(checked: bool) -> Self {
        Self::new(String::new(), checked)
    }
}

pub type EventCallback = Box<dyn FnMut(&ChangeEvent)>;
pub type ValueCallback = Box<dyn FnMut(&Value)>;

/// A binding whose change handler consumes a UI event.
pub trait EventBinding {
    fn name(&self) -> &str;
    fn kind(&self) -> BindingKind;
    fn handle_change(&mut self, store: &mut FieldStore, event: &ChangeEvent);
}

/// A binding whose change handler takes the new value directly.
pub trait ValueBinding {
    fn name(&self) -> &str;
    fn kind(&self) -> BindingKind;
    fn handle_value(&mut self, store: &mut FieldStore, value: Value);
}

impl FieldStore {
    pub fn text(&self, name: impl Into<String>) -> TextBinding {
        TextBinding::new(name, InputType::Text)
    }

    pub fn email(&self, name: impl Into<String>) -> TextBinding {
        TextBinding::new(name, InputType::Email)
    }

    /// Same as [`FieldStore::text`]; selects store a single string.
    pub fn select(&self, name: impl Into<String>) -> TextBinding {
        self.text(name)
    }

    pub fn radio(&self, name: impl Into<String>, choice: impl Into<Value>) -> RadioBinding {
        RadioBinding::new(name, choice.into())
    }

    /// Names ending in `[]` bind to an array of choices, anything else to a flag.
    pub fn checkbox(&self, name: impl Into<String>, choice: impl Into<Value>) -> CheckboxBinding {
        CheckboxBinding::new(name, choice.into())
    }

    pub fn raw(&self, name: impl Into<String>) -> RawBinding {
        RawBinding::new(name)
    }
}
