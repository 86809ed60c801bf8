//! # Login and registration payloads
//!
//! `POST /api/register` takes `{username, email, password}` and
//! `POST /api/login` takes `{username, password}`; both answer `{token}` on
//! success. The forms are sent exactly as typed, nothing is trimmed or checked
//! client-side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`.
#[derive(Clone, Default, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Clone, Default, Serialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful response of both credential endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
