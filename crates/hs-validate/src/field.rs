//! Form fields and the inline messages shown for their violations.

use std::fmt;

use serde::Serialize;

use crate::Violation;

/// A validated input on one of the portal forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    TeamName,
    LeaderName,
    Email,
    Password,
    MemberName,
    MemberEmail,
    #[serde(rename = "github")]
    GithubLink,
    #[serde(rename = "file")]
    ProjectFile,
    #[serde(rename = "video")]
    DemoVideo,
    Dataset,
}

impl Field {
    /// Key used for the field in rendered error maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TeamName => "team_name",
            Self::LeaderName => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::MemberName => "member_name",
            Self::MemberEmail => "member_email",
            Self::GithubLink => "github",
            Self::ProjectFile => "file",
            Self::DemoVideo => "video",
            Self::Dataset => "dataset",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamName => "Team name",
            Self::LeaderName => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::MemberName => "Member name",
            Self::MemberEmail => "Member email",
            Self::GithubLink => "GitHub repository link",
            Self::ProjectFile => "Project files",
            Self::DemoVideo => "Demo video",
            Self::Dataset => "Dataset",
        }
    }

    /// Inline message for `violation` on this field.
    #[must_use]
    pub fn message(self, violation: Violation) -> String {
        let fixed = match (self, violation) {
            (Self::Email, Violation::InvalidFormat) => "Please enter a valid email",
            (Self::Password, Violation::TooShort { .. }) => {
                "Password must be at least 6 characters"
            }
            (Self::MemberEmail, Violation::InvalidFormat) => "Invalid email",
            (Self::GithubLink, Violation::Required) => "GitHub repository link is required",
            (Self::GithubLink, Violation::InvalidUrl) => {
                "Please enter a valid GitHub repository URL"
            }
            (Self::ProjectFile, Violation::Required) => "Please upload your project files",
            (Self::ProjectFile, Violation::TooLarge { .. }) => "File size must be less than 100MB",
            (Self::DemoVideo, Violation::TooLarge { .. }) => "Video size must be less than 500MB",
            (Self::DemoVideo, Violation::WrongType { .. }) => "Please upload a valid video file",
            (Self::Dataset, Violation::TooLarge { .. }) => "Dataset size must be less than 50MB",
            (Self::Dataset, Violation::WrongType { .. }) => "Please upload a CSV dataset file",
            (field, Violation::Required) => return format!("{} is required", field.label()),
            (field, other) => return format!("{}: {other}", field.label()),
        };
        fixed.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A violation attached to the field it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldIssue {
    pub field: Field,
    pub violation: Violation,
}

impl FieldIssue {
    #[must_use]
    pub const fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// Run a validator and attach any violation to `field`.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldIssue`] when the validator reports a violation.
    pub fn check(field: Field, outcome: Result<(), Violation>) -> Result<(), Self> {
        outcome.map_err(|violation| Self::new(field, violation))
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.field.message(self.violation)
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FieldIssue {}
