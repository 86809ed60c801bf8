//! # Screen state machines
//!
//! Each routed screen has a plain-Rust counterpart here that owns its state and
//! exposes the actions the view triggers (`load`, `submit`, `delete`). They are
//! generic over [`HttpTransport`](api::HttpTransport) and take the session
//! explicitly, so tests drive them directly without a Dioxus runtime.
//!
//! | Screen | Type | Actions |
//! |--------|------|---------|
//! | browse-all | [`BrowseAll`] | `load` |
//! | browse-mine | [`MyRecipes`] | `load`, `delete`, `edit` |
//! | login | [`LoginForm`] | `submit` |
//! | register | [`RegisterForm`] | `submit` |
//! | create | [`CreateForm`] | `submit` |
//! | edit | [`EditForm`] | `load`, `submit` |
//!
//! Actions that navigate return a [`Destination`]; the web app maps it onto its
//! router.

mod auth_form;
mod browse;
mod recipe_form;

pub use auth_form::{LoginForm, RegisterForm};
pub use browse::{BrowseAll, MyRecipes};
pub use recipe_form::{CreateForm, EditForm, EditSource};

use api::ApiError;
use store::{Credential, KeyValueStorage, SessionStore};

/// Where a screen wants to go after a successful action.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    MyRecipes,
    Edit { id: String },
}

/// `Idle → Loading → Loaded | Error`, one per fetch-backed screen.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    pub fn start(&mut self) {
        *self = Self::Loading;
    }

    /// Settle with `result`, using `fallback` when the error text is empty.
    pub fn resolve(&mut self, result: Result<T, ApiError>, fallback: &str) {
        *self = match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Error(e.message_or(fallback)),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Receives the credential issued by login or registration.
///
/// Implemented for [`SessionStore`] directly and, in the app, for the
/// session signal held in context.
pub trait CredentialSink {
    fn store_credential(&mut self, credential: Credential);
}

impl<S: KeyValueStorage> CredentialSink for SessionStore<S> {
    fn store_credential(&mut self, credential: Credential) {
        self.set(credential);
    }
}
