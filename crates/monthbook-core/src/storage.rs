//! Persistence abstraction for month state.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::CoreError;

/// Abstraction over string key-value backends capable of storing serialized
/// month state. Injected into [`crate::LedgerStore`] so tests can substitute
/// an in-memory fake.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-memory [`KeyValueStore`] used by tests and embedders without a
/// filesystem. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value, bypassing the trait's error plumbing.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
