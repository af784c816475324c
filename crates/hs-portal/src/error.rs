//! Portal error types.
//!
//! Validation failures are recoverable and carry the inline messages that were
//! recorded on the form. Registration failures carry the banner text.

use hs_api::ApiError;
use hs_core::enums::{PortalVariant, Route};
use hs_core::errors::CoreError;
use thiserror::Error;

use crate::upload::UploadError;

#[derive(Debug, Error)]
pub enum PortalError {
    /// One or more fields failed validation; messages are also on the form.
    #[error("{form} has invalid fields: {}", messages.join("; "))]
    Validation {
        form: &'static str,
        messages: Vec<String>,
    },

    /// The registration call failed; `message` is the banner text.
    #[error("Registration failed: {message}")]
    RegistrationFailed { message: String },

    /// Terms acceptance was attempted without ticking the agreement box.
    #[error("the terms must be agreed to before accepting")]
    TermsNotAgreed,

    /// Group size outside the supported range.
    #[error("group size must be between 2 and 4, got {0}")]
    InvalidGroupSize(u8),

    /// A member slot index that does not exist.
    #[error("no member slot at position {0}")]
    NoMemberSlot(usize),

    /// The feature does not exist in the running variant.
    #[error("{feature} is not available in the {variant} portal")]
    Unavailable {
        feature: &'static str,
        variant: PortalVariant,
    },

    /// The operation needs a page other than the current one.
    #[error("{action} requires the {expected} page, current page is {current}")]
    WrongPage {
        action: &'static str,
        expected: Route,
        current: Route,
    },

    /// A submit is already in flight on this form.
    #[error("{0} is already in progress")]
    Busy(&'static str),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Session(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ApiError),
}
