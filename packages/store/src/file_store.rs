//! # Filesystem-backed storage
//!
//! [`FileStorage`] is a [`KeyValueStorage`] implementation that keeps one file
//! per key under a base directory. Native builds use it to retain the session
//! credential across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>              # file containing the value
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStorage::platform_default`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/recipefeed/` |
//! | Linux | `~/.local/share/recipefeed/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\recipefeed\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::KeyValueStorage;

/// Filesystem-backed storage for native platforms.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Storage rooted at `<data_dir>/recipefeed`, or `./recipefeed` when the
    /// platform has no data dir.
    pub fn platform_default() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipefeed");
        Self::new(base)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers; strip separators so one can't escape `base`.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.base).map_err(|e| e.to_string())?;
        std::fs::write(self.entry_path(key), value).map_err(|e| e.to_string())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Credential, SessionStore};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "recipefeed_test_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = scratch_dir("restart");

        let mut session = SessionStore::restore(FileStorage::new(dir.clone()), "token");
        session.set(Credential::new("abc"));

        // Re-open from same directory
        let reopened = SessionStore::restore(FileStorage::new(dir.clone()), "token");
        assert_eq!(reopened.get().map(Credential::as_str), Some("abc"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key() {
        let dir = scratch_dir("missing");
        let storage = FileStorage::new(dir.clone());
        assert!(storage.remove("token").is_ok());
        assert!(storage.get("token").is_none());
    }

    #[test]
    fn test_key_cannot_escape_base() {
        let dir = scratch_dir("escape");
        let storage = FileStorage::new(dir.clone());
        storage.set("../token", "abc").unwrap();
        assert!(dir.join(".._token").exists());
        assert_eq!(storage.get("../token").as_deref(), Some("abc"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
