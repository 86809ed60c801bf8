//! # `localStorage` storage — browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] implementation used on the
//! **web platform**. It reads and writes `window.localStorage`, so the
//! credential survives page reloads for the same origin.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage` on
//! every call. The lookup fails when there is no window (workers) or when the
//! browser denies storage access; reads then return `None` and writes return
//! an error for the session store to log.

use web_sys::Storage;

use crate::session::KeyValueStorage;

/// `window.localStorage`-backed storage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, String> {
        let window = web_sys::window().ok_or("no window")?;
        window
            .local_storage()
            .map_err(|e| format!("localStorage unavailable: {e:?}"))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {e:?}"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| format!("localStorage remove failed: {e:?}"))
    }
}
