//! Terms acceptance gate.

use serde::Serialize;

use super::busy::Busy;
use crate::delay::SimulatedDelay;
use crate::error::PortalError;
use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TermsForm {
    agreed: bool,
    loading: bool,
}

impl TermsForm {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            agreed: false,
            loading: false,
        }
    }

    pub fn set_agreed(&mut self, agreed: bool) {
        self.agreed = agreed;
    }

    #[must_use]
    pub const fn agreed(&self) -> bool {
        self.agreed
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the accept button is enabled.
    #[must_use]
    pub const fn can_accept(&self) -> bool {
        self.agreed && !self.loading
    }

    /// Wait `delay`, then record acceptance on the session.
    ///
    /// # Errors
    ///
    /// [`PortalError::TermsNotAgreed`] if the box is unticked,
    /// [`PortalError::Busy`] while a previous accept is running, and
    /// [`PortalError::Session`] unless the session is waiting on terms.
    pub async fn accept(
        &mut self,
        session: &mut Session,
        delay: SimulatedDelay,
    ) -> Result<(), PortalError> {
        if self.loading {
            return Err(PortalError::Busy("terms acceptance"));
        }
        if !self.agreed {
            return Err(PortalError::TermsNotAgreed);
        }
        {
            let _busy = Busy::hold(&mut self.loading);
            delay.elapse().await;
        }
        session.accept_terms()?;
        tracing::info!("terms accepted");
        Ok(())
    }
}
