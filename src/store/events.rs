/// Emitted synchronously after a store mutation has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ValueSet { name: String },
    InitialStateReplaced,
    Cleared { name: String },
}

impl StoreEvent {
    /// Field affected by the mutation, `None` for whole-form resets.
    pub fn field(&self) -> Option<&str> {
        match self {
            StoreEvent::ValueSet { name } | StoreEvent::Cleared { name } => Some(name),
            StoreEvent::InitialStateReplaced => None,
        }
    }
}

pub type Listener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(super) usize);
