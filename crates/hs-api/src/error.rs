//! API error types.

use thiserror::Error;

/// Banner text when the server rejects a registration without a message.
pub const REJECTED_FALLBACK: &str = "Registration failed";

/// Banner text when the request never produced a usable answer.
pub const TRANSPORT_FALLBACK: &str = "An error occurred during registration. Please try again.";

/// Errors that can occur when calling the registration API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// The body's `message` field, or [`REJECTED_FALLBACK`].
        message: String,
    },

    /// A success response body was not JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text for the dismissable error banner on the registration page.
    #[must_use]
    pub fn banner_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => TRANSPORT_FALLBACK.to_string(),
        }
    }
}
