use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// A file handle captured from the participant, before any upload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArtifactFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl ArtifactFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Size formatted the way the dashboard shows it, e.g. `"12.50 MB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / BYTES_PER_MIB)
    }
}
