//! # hs-validate
//!
//! Synchronous, side-effect-free field validators for the HackSphere forms.
//!
//! Every validator returns `Result<(), Violation>`. A [`Violation`] says what is
//! wrong independent of where; callers pair it with a [`Field`] to get a
//! [`FieldIssue`], whose `Display` is the inline message shown next to the input.
//!
//! ```
//! use hs_validate::{Field, FieldIssue, validate_email};
//!
//! let issue = validate_email("not-an-email")
//!     .map_err(|violation| FieldIssue::new(Field::Email, violation))
//!     .unwrap_err();
//! assert_eq!(issue.to_string(), "Please enter a valid email");
//! ```

mod artifact;
mod error;
mod field;
mod text;
mod url;

pub use artifact::{
    DATASET_MAX_BYTES, DEMO_VIDEO_MAX_BYTES, PROJECT_FILE_MAX_BYTES, validate_dataset,
    validate_demo_video, validate_project_file,
};
pub use error::Violation;
pub use field::{Field, FieldIssue};
pub use text::{MIN_PASSWORD_LEN, validate_email, validate_password, validate_required};
pub use url::validate_github_url;

/// Bytes in one mebibyte.
pub const MIB: u64 = 1024 * 1024;
