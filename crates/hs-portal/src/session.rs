//! Session state holder.
//!
//! One [`Session`] lives for the whole application run. Forms never touch its
//! fields directly; they call the mutators, which enforce the monotonic flow
//! `unauthenticated → (terms_pending →) ready` and reset on logout.

use hs_core::entities::{Team, User};
use hs_core::enums::{PortalVariant, SessionPhase};
use hs_core::errors::CoreError;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    variant: PortalVariant,
    user: Option<User>,
    team: Option<Team>,
    terms_accepted: bool,
}

impl Session {
    #[must_use]
    pub fn new(variant: PortalVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn variant(&self) -> PortalVariant {
        self.variant
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    #[must_use]
    pub const fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match (&self.user, self.variant.has_terms_step(), self.terms_accepted) {
            (None, _, _) => SessionPhase::Unauthenticated,
            (Some(_), true, false) => SessionPhase::TermsPending,
            (Some(_), _, _) => SessionPhase::Ready,
        }
    }

    /// Phase a freshly signed-in session lands in.
    const fn signed_in_phase(&self) -> SessionPhase {
        if self.variant.has_terms_step() {
            SessionPhase::TermsPending
        } else {
            SessionPhase::Ready
        }
    }

    fn transition(&self, next: SessionPhase) -> Result<(), CoreError> {
        let current = self.phase();
        if current.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: current.to_string(),
                to: next.to_string(),
            })
        }
    }

    /// Sign in an existing participant. No team is attached.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] if a user is already signed in.
    pub fn login(&mut self, user: User) -> Result<(), CoreError> {
        self.transition(self.signed_in_phase())?;
        tracing::debug!(email = %user.email, "session signed in");
        self.user = Some(user);
        self.team = None;
        self.terms_accepted = false;
        Ok(())
    }

    /// Sign in a newly registered participant together with their team.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] if a user is already signed in, and
    /// [`CoreError::Validation`] if the team breaks its size invariants.
    pub fn register(&mut self, user: User, team: Team) -> Result<(), CoreError> {
        self.transition(self.signed_in_phase())?;
        team.check()?;
        tracing::debug!(
            email = %user.email,
            team = %team.name,
            size = team.size,
            "session registered"
        );
        self.user = Some(user);
        self.team = Some(team);
        self.terms_accepted = false;
        Ok(())
    }

    /// Record terms acceptance.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless the session is waiting on terms.
    pub fn accept_terms(&mut self) -> Result<(), CoreError> {
        if self.phase() != SessionPhase::TermsPending {
            return Err(CoreError::InvalidTransition {
                from: self.phase().to_string(),
                to: SessionPhase::Ready.to_string(),
            });
        }
        tracing::debug!("terms accepted");
        self.terms_accepted = true;
        Ok(())
    }

    /// Clear user, team, and terms flag. Logging out twice is harmless.
    pub fn logout(&mut self) {
        if self.user.is_some() {
            tracing::debug!("session signed out");
        }
        self.user = None;
        self.team = None;
        self.terms_accepted = false;
    }
}
