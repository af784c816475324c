//! Scoped in-flight markers for form submits and slot uploads.
//!
//! Both guards release on drop, so a submit future cancelled mid-await
//! (timeout, `select!`) leaves the form usable.

use hs_core::enums::ArtifactSlot;

/// Holds a form's loading flag for the life of the guard.
pub(crate) struct Busy<'a> {
    flag: &'a mut bool,
}

impl<'a> Busy<'a> {
    pub(crate) fn hold(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Marks one artifact slot as uploading for the life of the guard.
pub(crate) struct UploadInFlight<'a> {
    uploading: &'a mut Vec<ArtifactSlot>,
    slot: ArtifactSlot,
}

impl<'a> UploadInFlight<'a> {
    pub(crate) fn start(uploading: &'a mut Vec<ArtifactSlot>, slot: ArtifactSlot) -> Self {
        uploading.push(slot);
        Self { uploading, slot }
    }
}

impl Drop for UploadInFlight<'_> {
    fn drop(&mut self) {
        let slot = self.slot;
        self.uploading.retain(|s| *s != slot);
    }
}
