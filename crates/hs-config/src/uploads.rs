//! Simulated upload latencies per artifact slot.

use std::time::Duration;

use hs_core::enums::ArtifactSlot;
use serde::{Deserialize, Serialize};

const fn default_project_file_delay_ms() -> u64 {
    1500
}

const fn default_demo_video_delay_ms() -> u64 {
    2000
}

const fn default_dataset_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadsConfig {
    #[serde(default = "default_project_file_delay_ms")]
    pub project_file_delay_ms: u64,

    #[serde(default = "default_demo_video_delay_ms")]
    pub demo_video_delay_ms: u64,

    #[serde(default = "default_dataset_delay_ms")]
    pub dataset_delay_ms: u64,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            project_file_delay_ms: default_project_file_delay_ms(),
            demo_video_delay_ms: default_demo_video_delay_ms(),
            dataset_delay_ms: default_dataset_delay_ms(),
        }
    }
}

impl UploadsConfig {
    /// Simulated transfer time for `slot`.
    #[must_use]
    pub const fn delay_for(&self, slot: ArtifactSlot) -> Duration {
        Duration::from_millis(match slot {
            ArtifactSlot::ProjectFile => self.project_file_delay_ms,
            ArtifactSlot::DemoVideo => self.demo_video_delay_ms,
            ArtifactSlot::Dataset => self.dataset_delay_ms,
        })
    }

    /// All delays zeroed. Used by tests and scripted runs.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            project_file_delay_ms: 0,
            demo_video_delay_ms: 0,
            dataset_delay_ms: 0,
        }
    }
}
