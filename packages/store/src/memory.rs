use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValueStorage;

/// In-memory storage for testing and as a fallback when nothing durable exists.
///
/// Clones share the same map, so a test can keep a handle and inspect what a
/// [`crate::SessionStore`] persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.lock().map_err(|e| e.to_string())?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("token").is_none());

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.set("token", "def").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("def"));

        storage.remove("token").unwrap();
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("nope").is_ok());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("token", "abc").unwrap();
        assert_eq!(other.get("token").as_deref(), Some("abc"));
    }
}
