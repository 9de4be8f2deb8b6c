mod dirty;
mod error;
mod events;
mod options;

use std::fmt;

use indexmap::IndexSet;
use serde_json::{Map, Value};

pub use dirty::{is_blank, is_truthy, strict_eq, structural_eq};
pub use error::InitialStateError;
pub use events::{Listener, ListenerId, StoreEvent};
pub use options::{ClearPolicy, StoreOptions, WriteFlags};

/// Current values of a form plus the touched/dirty indexes derived from them.
///
/// The dirty set is maintained on every write instead of being recomputed
/// on read, so `has_dirty_fields` and `is_dirty` stay O(1).
pub struct FieldStore {
    initial: Map<String, Value>,
    values: Map<String, Value>,
    dirty: IndexSet<String>,
    touched: IndexSet<String>,
    options: StoreOptions,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl FieldStore {
    pub fn new(initial: Map<String, Value>) -> Self {
        Self::with_options(initial, StoreOptions::default())
    }

    pub fn with_options(initial: Map<String, Value>, options: StoreOptions) -> Self {
        Self {
            values: initial.clone(),
            initial,
            dirty: IndexSet::new(),
            touched: IndexSet::new(),
            options,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Build a store from an arbitrary JSON value; the root must be an object.
    pub fn from_value(value: Value) -> Result<Self, InitialStateError> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(InitialStateError::not_an_object(&other)),
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn initial_state(&self) -> &Map<String, Value> {
        &self.initial
    }

    pub fn dirty(&self) -> &IndexSet<String> {
        &self.dirty
    }

    pub fn touched(&self) -> &IndexSet<String> {
        &self.touched
    }

    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn has_dirty_fields(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn has_touched_fields(&self) -> bool {
        !self.touched.is_empty()
    }

    /// Snapshot of the current values as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: Value) {
        self.set_value_with(name, value, WriteFlags::default());
    }

    /// Write `value` under `name`, updating the touched and dirty indexes
    /// according to `flags`. Other fields are never affected.
    pub fn set_value_with(&mut self, name: impl Into<String>, value: Value, flags: WriteFlags) {
        let name = name.into();
        let dirty = flags
            .dirty
            .then(|| dirty::differs_from_baseline(self.initial.get(&name), &value));

        self.values.insert(name.clone(), value);
        if flags.touch {
            self.touched.insert(name.clone());
        }
        match dirty {
            Some(true) => {
                self.dirty.insert(name.clone());
            }
            Some(false) => {
                self.dirty.shift_remove(&name);
            }
            None => {}
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = name.as_str(),
            dirty = self.dirty.contains(&name),
            touched = self.touched.contains(&name),
            "field value set"
        );

        self.emit(StoreEvent::ValueSet { name });
    }

    pub fn set_form_state(&mut self, name: impl Into<String>, value: Value, flags: WriteFlags) {
        self.set_value_with(name, value, flags);
    }

    /// Replace both the baseline and the current values, forgetting every
    /// touched and dirty mark.
    pub fn set_initial_state(&mut self, state: Map<String, Value>) {
        self.values = state.clone();
        self.initial = state;
        self.dirty.clear();
        self.touched.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(fields = self.values.len(), "initial state replaced");

        self.emit(StoreEvent::InitialStateReplaced);
    }

    /// Blank `name` to an empty string. With the default `ClearPolicy::ResetAll`
    /// the dirty and touched sets are emptied for every field.
    pub fn clear(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.values.insert(name.clone(), Value::String(String::new()));
        match self.options.clear_policy {
            ClearPolicy::ResetAll => {
                self.dirty.clear();
                self.touched.clear();
            }
            ClearPolicy::FieldOnly => {
                self.dirty.shift_remove(&name);
                self.touched.shift_remove(&name);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            field = name.as_str(),
            policy = ?self.options.clear_policy,
            "field cleared"
        );

        self.emit(StoreEvent::Cleared { name });
    }

    /// Register a listener that runs synchronously after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new(Map::new())
    }
}

impl fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldStore")
            .field("initial", &self.initial)
            .field("values", &self.values)
            .field("dirty", &self.dirty)
            .field("touched", &self.touched)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
