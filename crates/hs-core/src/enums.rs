//! Routes, session phases, variants, and artifact slots.
//!
//! All enums use `snake_case` serialization. The session phase enum provides
//! `allowed_next_states()` so the session holder can enforce monotonic flows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// A page of the portal addressable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Register,
    Terms,
    Dashboard,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Login, Self::Register, Self::Terms, Self::Dashboard];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Terms => "/terms",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Match a request path against the known routes.
    ///
    /// A single trailing slash is tolerated (`/login/`); query strings and
    /// fragments are ignored. Returns `None` for `/` and unknown paths.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Where a session stands in the sign-in flow.
///
/// ```text
/// unauthenticated → terms_pending → ready
///                 → ready            (classic variant, no terms step)
/// terms_pending | ready → unauthenticated (logout)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Unauthenticated,
    TermsPending,
    Ready,
}

impl SessionPhase {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unauthenticated => &[Self::TermsPending, Self::Ready],
            Self::TermsPending => &[Self::Ready, Self::Unauthenticated],
            Self::Ready => &[Self::Unauthenticated],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::TermsPending => "terms_pending",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PortalVariant
// ---------------------------------------------------------------------------

/// Which feature set the portal runs with.
///
/// `Classic` is login, register, and dashboard. `Extended` adds the terms
/// step and the dataset and note fields on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PortalVariant {
    Classic,
    #[default]
    Extended,
}

impl PortalVariant {
    #[must_use]
    pub const fn has_terms_step(self) -> bool {
        matches!(self, Self::Extended)
    }

    #[must_use]
    pub const fn has_dataset_field(self) -> bool {
        matches!(self, Self::Extended)
    }

    #[must_use]
    pub const fn has_note_field(self) -> bool {
        matches!(self, Self::Extended)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for PortalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArtifactSlot
// ---------------------------------------------------------------------------

/// A file slot on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSlot {
    ProjectFile,
    DemoVideo,
    Dataset,
}

impl ArtifactSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProjectFile => "project_file",
            Self::DemoVideo => "demo_video",
            Self::Dataset => "dataset",
        }
    }
}

impl fmt::Display for ArtifactSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
