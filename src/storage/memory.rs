//! In-process storage backend.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageError;
use crate::storage::TokenStorage;

/// Key-value store held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, mostly useful in tests.
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.items.read() {
            Ok(items) => items.get(key).cloned(),
            Err(_) => {
                tracing::warn!(key, "Memory storage lock poisoned");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".into()))?
            .remove(key);
        Ok(())
    }
}
