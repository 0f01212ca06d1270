use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Stored state of one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    pub value: String,
    pub read_only: bool,
    pub dynamic: bool,
}

impl PropertyEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            read_only: false,
            dynamic: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }
}

/// Shared handle onto the build's property collection.
///
/// Clones observe the same collection, so a bound function set sees every
/// property the engine sets after binding.
#[derive(Debug, Clone, Default)]
pub struct PropertyView {
    entries: Arc<RwLock<BTreeMap<String, PropertyEntry>>>,
}

impl PropertyView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: impl Into<String>, entry: PropertyEntry) {
        self.entries.write().insert(name.into(), entry);
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, PropertyEntry::new(value));
    }

    pub fn get(&self, name: &str) -> Option<PropertyEntry> {
        self.entries.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
