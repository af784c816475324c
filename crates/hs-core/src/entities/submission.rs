use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ArtifactFile;

/// Local confirmation of an accepted project submission. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub participant: String,
    pub team_name: Option<String>,
    pub github_link: String,
    pub project_file: ArtifactFile,
    pub demo_video: Option<ArtifactFile>,
    pub dataset: Option<ArtifactFile>,
    pub note: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}
