//! `localStorage` adapter

use super::{describe, window};
use vinyl_core::{KeyValueStore, Result, VinylError};
use web_sys::Storage;

/// [`KeyValueStore`] backed by `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the page's local storage
    ///
    /// Fails when storage is disabled (some private browsing modes).
    pub fn open() -> Result<Self> {
        let storage = window()?
            .local_storage()
            .map_err(|e| VinylError::storage(describe(&e)))?
            .ok_or_else(|| VinylError::storage("localStorage unavailable"))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| VinylError::storage(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| VinylError::storage(describe(&e)))
    }
}
