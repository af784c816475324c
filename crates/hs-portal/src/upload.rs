//! Artifact upload abstraction.
//!
//! The dashboard only talks to [`Uploader`]. [`SimulatedUploader`] waits a
//! per-slot delay and performs no transfer; a real transport can replace it
//! without changing the dashboard.

use std::future::Future;

use chrono::{DateTime, Utc};
use hs_config::UploadsConfig;
use hs_core::entities::ArtifactFile;
use hs_core::enums::ArtifactSlot;
use serde::Serialize;
use thiserror::Error;

use crate::delay::SimulatedDelay;

/// A file accepted into a submission slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedArtifact {
    pub slot: ArtifactSlot,
    pub file: ArtifactFile,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload of {file} to {slot} failed: {reason}")]
    Failed {
        slot: ArtifactSlot,
        file: String,
        reason: String,
    },
}

/// Moves a validated file into its submission slot.
pub trait Uploader {
    fn upload(
        &self,
        slot: ArtifactSlot,
        file: ArtifactFile,
    ) -> impl Future<Output = Result<UploadedArtifact, UploadError>>;
}

/// Timer-backed stand-in for a real upload.
#[derive(Debug, Clone, Default)]
pub struct SimulatedUploader {
    delays: UploadsConfig,
}

impl SimulatedUploader {
    #[must_use]
    pub const fn new(delays: UploadsConfig) -> Self {
        Self { delays }
    }

    /// An uploader that completes immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(UploadsConfig::instant())
    }
}

impl Uploader for SimulatedUploader {
    async fn upload(
        &self,
        slot: ArtifactSlot,
        file: ArtifactFile,
    ) -> Result<UploadedArtifact, UploadError> {
        tracing::debug!(%slot, file = %file.name, size = file.size_bytes, "simulating upload");
        SimulatedDelay::new(self.delays.delay_for(slot)).elapse().await;
        Ok(UploadedArtifact {
            slot,
            file,
            uploaded_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simulated_upload_returns_the_file() {
        let uploader = SimulatedUploader::instant();
        let file = ArtifactFile::new("demo.mp4", 42, "video/mp4");
        let uploaded = uploader
            .upload(ArtifactSlot::DemoVideo, file.clone())
            .await
            .unwrap();
        assert_eq!(uploaded.slot, ArtifactSlot::DemoVideo);
        assert_eq!(uploaded.file, file);
    }
}
