//! # Session store
//!
//! Holds the optional bearer [`Credential`] for the signed-in user and mirrors
//! it into a [`KeyValueStorage`] so a reload restores the session.
//!
//! The store performs no validation of the token's shape or expiry. An expired
//! token is only discovered when the backend rejects a request, and nothing
//! here reacts to that: the session stays as it is until [`SessionStore::clear`]
//! is called.
//!
//! Storage failures are logged and otherwise ignored. The in-memory state is
//! always updated so the running app behaves consistently even when the
//! backend storage is unavailable (private browsing, read-only home dir).

use std::fmt;

/// An opaque bearer token issued by the backend.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in logs via `{:?}` on screen state, keep them out.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Synchronous string key/value storage used to persist the credential.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// The client's session: an optional credential plus the storage it lives in.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    credential: Option<Credential>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Open a session, restoring any credential previously persisted under `key`.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let credential = storage
            .get(&key)
            .filter(|token| !token.is_empty())
            .map(Credential::new);
        tracing::debug!(restored = credential.is_some(), "session opened");
        Self {
            storage,
            key,
            credential,
        }
    }

    pub fn get(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Persist `credential` and make it the current one.
    pub fn set(&mut self, credential: Credential) {
        if let Err(e) = self.storage.set(&self.key, credential.as_str()) {
            tracing::warn!("Failed to persist credential: {e}");
        }
        self.credential = Some(credential);
    }

    /// Forget the credential, both persisted and in memory.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            tracing::warn!("Failed to remove persisted credential: {e}");
        }
        self.credential = None;
    }
}
