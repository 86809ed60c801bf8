//! Client-side error taxonomy.
//!
//! Screens never branch on the variant; they render the `Display` text. A
//! rejected request shows whatever the server put in its body, so 4xx and 5xx,
//! expired tokens and validation failures all look alike.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-success status. Displays as the raw response body.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Not logged in")]
    MissingCredential,

    #[error("Missing recipe id")]
    MissingId,
}

impl ApiError {
    /// Display text, or `fallback` when the server sent an empty body.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
