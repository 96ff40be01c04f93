//! In-memory state store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::state_store::{StateStore, StoreError};

/// Non-durable [`StateStore`] holding raw payloads in a map.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
