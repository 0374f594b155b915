//! Persistent Key-Value Storage
//!
//! Narrow storage capability for the language choice: `localStorage` in the
//! browser, a process-local map everywhere else.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::I18nError;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Window `localStorage`, looked up on every call
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `None` when there is no window or storage is disabled
    pub fn open() -> Option<Self> {
        Self::storage().map(|_| BrowserStorage)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let storage = Self::storage()
            .ok_or_else(|| I18nError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| I18nError::Storage(format!("{:?}", e)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| I18nError::Storage("memory storage poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser storage when available, memory otherwise
pub fn detect_storage() -> Arc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Some(storage) => Arc::new(storage),
        None => {
            log::warn!("[I18N] localStorage unavailable, language choice will not persist");
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("lang"), None);
        storage.set("lang", "de").unwrap();
        assert_eq!(storage.get("lang"), Some("de".to_string()));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        other.set("lang", "en").unwrap();
        assert_eq!(storage.get("lang"), Some("en".to_string()));
    }
}
