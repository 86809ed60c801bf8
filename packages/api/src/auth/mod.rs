//! Request and response bodies for the credential endpoints.

mod forms;

pub use forms::{LoginRequest, RegisterRequest, TokenResponse};
