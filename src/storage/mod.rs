//! Persistent key-value storage for the access token.
//!
//! The login flow writes the token; the client only ever reads it, once per
//! outgoing request. The interface mirrors the browser's Web Storage API so the
//! same calling code works on every platform:
//!
//! - **WASM**: [`LocalStorage`] wraps `window.localStorage`.
//! - **Native**: [`MemoryStorage`] for process-local state, [`FileStorage`] to
//!   survive restarts.
//!
//! Reads are synchronous. A backend that fails to read logs the failure and
//! reports the key as absent; the request then proceeds unauthenticated.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod local;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use local::LocalStorage;

use std::sync::Arc;

use crate::error::StorageError;

/// Synchronous string key-value store.
pub trait TokenStorage: Send + Sync {
    /// Current value for `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: TokenStorage + ?Sized> TokenStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// The storage backend a client uses when none is configured.
pub fn default_storage() -> Arc<dyn TokenStorage> {
    #[cfg(all(feature = "wasm", target_arch = "wasm32"))]
    let storage: Arc<dyn TokenStorage> = Arc::new(LocalStorage);
    #[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
    let storage: Arc<dyn TokenStorage> = Arc::new(MemoryStorage::new());
    storage
}
