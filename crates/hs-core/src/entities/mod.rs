//! Entity structs for HackSphere domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output
//! and schema validation.

mod artifact;
mod submission;
mod team;
mod user;

pub use artifact::ArtifactFile;
pub use submission::SubmissionReceipt;
pub use team::{MAX_TEAM_SIZE, MIN_GROUP_SIZE, Team, TeamMember};
pub use user::User;
