//! Cross-cutting error types for HackSphere.
//!
//! Domain-specific errors (`ApiError`, `ConfigError`, `PortalError`) live in
//! their respective crates.

use thiserror::Error;

/// Errors that can be raised by any HackSphere crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A session transition was attempted that is not allowed.
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Data failed a structural constraint.
    #[error("Validation error: {0}")]
    Validation(String),
}
