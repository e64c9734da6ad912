use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::WidgetResult;

use super::kv::{KeyValueStore, StoreKey};

/// In-memory store for tests and hosts without durable storage
///
/// Records live only as long as the instance; sharing one `Arc<MemoryStore>`
/// across widgets models reloads within a browsing session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<StoreKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> std::sync::MutexGuard<'_, HashMap<StoreKey, String>> {
        // Both record values are plain strings, so a poisoned lock still
        // holds a usable map.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &StoreKey) -> WidgetResult<Option<String>> {
        Ok(self.records().get(key).cloned())
    }

    fn put(&self, key: &StoreKey, value: &str) -> WidgetResult<()> {
        self.records().insert(*key, value.to_string());
        Ok(())
    }
}
