use std::sync::Arc;

use dashmap::DashMap;

use crate::storage::Storage;

/// Process-local store, lost on exit.
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new())
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn save(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
