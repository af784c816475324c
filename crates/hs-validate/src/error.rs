//! Validation violation kinds.

use serde::Serialize;
use thiserror::Error;

/// What is wrong with a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// The value is empty (or whitespace only where trimming applies).
    #[error("value is required")]
    Required,

    /// The value does not match the expected syntax.
    #[error("invalid format")]
    InvalidFormat,

    /// The value has fewer characters than allowed.
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    /// The value is not a GitHub repository URL.
    #[error("not a GitHub repository URL")]
    InvalidUrl,

    /// The file exceeds the slot's size limit.
    #[error("larger than {limit_mib} MiB")]
    TooLarge { limit_mib: u64 },

    /// The file is not of the accepted kind.
    #[error("expected {expected}")]
    WrongType { expected: &'static str },
}
