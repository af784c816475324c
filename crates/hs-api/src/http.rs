//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`ApiError::Api`] mapping, including pulling
//! the human-readable `message` out of a JSON error body.

use serde::Deserialize;

use crate::error::{ApiError, REJECTED_FALLBACK};

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status,
            message: error_message(&body),
        });
    }
    Ok(resp)
}

/// Extract `message` from a JSON error body, falling back to a generic text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REJECTED_FALLBACK.to_string())
}
