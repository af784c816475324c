//! Project submission draft.
//!
//! Each artifact slot validates on its own and keeps its own error. A rejected
//! file leaves any previously accepted file in place. Submitting recomputes
//! the required checks and is blocked by every outstanding error, including
//! slot errors left from a rejected video or dataset.

use chrono::Utc;
use hs_core::entities::{ArtifactFile, SubmissionReceipt, Team, User};
use hs_core::enums::{ArtifactSlot, PortalVariant};
use hs_validate::{
    Field, FieldIssue, Violation, validate_dataset, validate_demo_video, validate_github_url,
    validate_project_file,
};
use serde::Serialize;

use super::FieldErrors;
use super::busy::UploadInFlight;
use crate::error::PortalError;
use crate::upload::{UploadedArtifact, Uploader};

/// Confirmation text shown after a successful submit.
pub const SUBMITTED_MESSAGE: &str = "Project submitted successfully!";

const fn slot_field(slot: ArtifactSlot) -> Field {
    match slot {
        ArtifactSlot::ProjectFile => Field::ProjectFile,
        ArtifactSlot::DemoVideo => Field::DemoVideo,
        ArtifactSlot::Dataset => Field::Dataset,
    }
}

fn validate_slot(slot: ArtifactSlot, file: &ArtifactFile) -> Result<(), Violation> {
    match slot {
        ArtifactSlot::ProjectFile => validate_project_file(file),
        ArtifactSlot::DemoVideo => validate_demo_video(file),
        ArtifactSlot::Dataset => validate_dataset(file),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDraft {
    variant: PortalVariant,
    github_link: String,
    project_file: Option<UploadedArtifact>,
    demo_video: Option<UploadedArtifact>,
    dataset: Option<UploadedArtifact>,
    note: String,
    uploading: Vec<ArtifactSlot>,
    errors: FieldErrors,
}

impl SubmissionDraft {
    #[must_use]
    pub fn new(variant: PortalVariant) -> Self {
        Self {
            variant,
            github_link: String::new(),
            project_file: None,
            demo_video: None,
            dataset: None,
            note: String::new(),
            uploading: Vec::new(),
            errors: FieldErrors::new(),
        }
    }

    #[must_use]
    pub fn github_link(&self) -> &str {
        &self.github_link
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn is_uploading(&self, slot: ArtifactSlot) -> bool {
        self.uploading.contains(&slot)
    }

    #[must_use]
    pub const fn artifact(&self, slot: ArtifactSlot) -> Option<&UploadedArtifact> {
        match slot {
            ArtifactSlot::ProjectFile => self.project_file.as_ref(),
            ArtifactSlot::DemoVideo => self.demo_video.as_ref(),
            ArtifactSlot::Dataset => self.dataset.as_ref(),
        }
    }

    const fn slot_mut(&mut self, slot: ArtifactSlot) -> &mut Option<UploadedArtifact> {
        match slot {
            ArtifactSlot::ProjectFile => &mut self.project_file,
            ArtifactSlot::DemoVideo => &mut self.demo_video,
            ArtifactSlot::Dataset => &mut self.dataset,
        }
    }

    fn ensure_slot(&self, slot: ArtifactSlot) -> Result<(), PortalError> {
        if slot == ArtifactSlot::Dataset && !self.variant.has_dataset_field() {
            return Err(PortalError::Unavailable {
                feature: "dataset upload",
                variant: self.variant,
            });
        }
        Ok(())
    }

    /// Update the GitHub link, validating it as typed. An empty link is not
    /// an error until submit.
    pub fn set_github_link(&mut self, link: impl Into<String>) {
        self.github_link = link.into();
        if self.github_link.is_empty() {
            self.errors.clear(Field::GithubLink);
        } else {
            self.errors
                .apply(Field::GithubLink, validate_github_url(&self.github_link));
        }
    }

    /// Store the free-text note, trimmed.
    ///
    /// # Errors
    ///
    /// [`PortalError::Unavailable`] in the classic variant.
    pub fn set_note(&mut self, note: &str) -> Result<(), PortalError> {
        if !self.variant.has_note_field() {
            return Err(PortalError::Unavailable {
                feature: "submission note",
                variant: self.variant,
            });
        }
        note.trim().clone_into(&mut self.note);
        Ok(())
    }

    /// Validate `file` for `slot` and, if it passes, upload it into the slot.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] when the file is rejected (the slot error
    /// is recorded and the previous file kept), [`PortalError::Unavailable`]
    /// for a dataset in the classic variant, [`PortalError::Busy`] while the
    /// slot is already uploading, and [`PortalError::Upload`] on transfer
    /// failure.
    pub async fn select<U: Uploader>(
        &mut self,
        slot: ArtifactSlot,
        file: ArtifactFile,
        uploader: &U,
    ) -> Result<&UploadedArtifact, PortalError> {
        self.ensure_slot(slot)?;
        if self.is_uploading(slot) {
            return Err(PortalError::Busy("upload"));
        }
        let field = slot_field(slot);
        if let Err(issue) = FieldIssue::check(field, validate_slot(slot, &file)) {
            tracing::warn!(%slot, file = %file.name, error = %issue, "artifact rejected");
            self.errors.record(issue);
            return Err(PortalError::Validation {
                form: "submission",
                messages: vec![issue.message()],
            });
        }
        self.errors.clear(field);

        let outcome = {
            let _upload = UploadInFlight::start(&mut self.uploading, slot);
            uploader.upload(slot, file).await
        };

        let uploaded = outcome?;
        tracing::debug!(%slot, file = %uploaded.file.name, "artifact stored");
        Ok(self.slot_mut(slot).insert(uploaded))
    }

    /// Drop the file in `slot` and its error.
    pub fn remove(&mut self, slot: ArtifactSlot) -> Option<UploadedArtifact> {
        self.errors.clear(slot_field(slot));
        self.slot_mut(slot).take()
    }

    /// Recompute the required checks. Returns whether the draft can submit.
    pub fn validate(&mut self) -> bool {
        if self.project_file.is_some() {
            self.errors.clear(Field::ProjectFile);
        } else {
            self.errors
                .record(FieldIssue::new(Field::ProjectFile, Violation::Required));
        }
        let github = if self.github_link.is_empty() {
            Err(Violation::Required)
        } else {
            validate_github_url(&self.github_link)
        };
        self.errors.apply(Field::GithubLink, github);
        self.errors.is_empty()
    }

    /// Validate and produce the local confirmation, then reset the draft.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] listing every outstanding error.
    pub fn submit(
        &mut self,
        user: &User,
        team: Option<&Team>,
    ) -> Result<SubmissionReceipt, PortalError> {
        if !self.validate() {
            tracing::warn!(errors = self.errors.len(), "submission rejected");
            return Err(PortalError::Validation {
                form: "submission",
                messages: self.errors.messages(),
            });
        }
        let Some(project_file) = self.project_file.take() else {
            return Err(PortalError::Validation {
                form: "submission",
                messages: vec![Field::ProjectFile.message(Violation::Required)],
            });
        };
        let receipt = SubmissionReceipt {
            participant: user.email.clone(),
            team_name: team.map(|t| t.name.clone()),
            github_link: std::mem::take(&mut self.github_link),
            project_file: project_file.file,
            demo_video: self.demo_video.take().map(|a| a.file),
            dataset: self.dataset.take().map(|a| a.file),
            note: Some(std::mem::take(&mut self.note)).filter(|n| !n.is_empty()),
            submitted_at: Utc::now(),
            message: SUBMITTED_MESSAGE.to_string(),
        };
        *self = Self::new(self.variant);
        tracing::info!(
            participant = %receipt.participant,
            github = %receipt.github_link,
            "project submitted"
        );
        Ok(receipt)
    }
}
