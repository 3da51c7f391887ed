//! Browser `localStorage` backend (WASM only).

use gloo::storage::{LocalStorage as BrowserStorage, Storage};

use crate::error::StorageError;
use crate::storage::TokenStorage;

/// `window.localStorage`.
///
/// Goes through the raw Web Storage handle rather than gloo's JSON helpers so
/// entries written by plain JavaScript (`localStorage.setItem`) read back
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl TokenStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match BrowserStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, "localStorage.getItem threw");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        BrowserStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable(format!("setItem({key}) threw")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        BrowserStorage::raw()
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable(format!("removeItem({key}) threw")))
    }
}
