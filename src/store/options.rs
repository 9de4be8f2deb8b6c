use serde::{Deserialize, Serialize};

/// What `clear` does to the dirty and touched indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Empty both sets for every field.
    #[default]
    ResetAll,
    /// Drop only the cleared field from both sets.
    FieldOnly,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub clear_policy: ClearPolicy,
}

impl StoreOptions {
    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }
}

/// Which indexes a write updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFlags {
    pub touch: bool,
    pub dirty: bool,
}

impl WriteFlags {
    pub fn silent() -> Self {
        Self {
            touch: false,
            dirty: false,
        }
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }
}

impl Default for WriteFlags {
    fn default() -> Self {
        Self {
            touch: true,
            dirty: true,
        }
    }
}
