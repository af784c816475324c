//! Login page state.

use hs_core::entities::User;
use hs_validate::{Field, validate_email, validate_password};
use serde::Serialize;

use super::FieldErrors;
use super::busy::Busy;
use crate::delay::SimulatedDelay;
use crate::error::PortalError;
use crate::session::Session;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    errors: FieldErrors,
    loading: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validate both fields, recording every error. Returns whether the form
    /// is clean.
    pub fn validate(&mut self) -> bool {
        self.errors.clear_all();
        let email_ok = self.errors.apply(Field::Email, validate_email(&self.email));
        let password_ok = self
            .errors
            .apply(Field::Password, validate_password(&self.password));
        email_ok && password_ok
    }

    /// Validate, wait `delay`, then sign the session in.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] when a field is invalid,
    /// [`PortalError::Busy`] while a previous submit is running, and
    /// [`PortalError::Session`] if the session is already signed in.
    pub async fn submit(
        &mut self,
        session: &mut Session,
        delay: SimulatedDelay,
    ) -> Result<User, PortalError> {
        if self.loading {
            return Err(PortalError::Busy("login"));
        }
        if !self.validate() {
            tracing::warn!(errors = self.errors.len(), "login rejected");
            return Err(PortalError::Validation {
                form: "login",
                messages: self.errors.messages(),
            });
        }

        {
            let _busy = Busy::hold(&mut self.loading);
            delay.elapse().await;
        }

        let user = User::from_login_email(&self.email);
        session.login(user.clone())?;
        tracing::info!(email = %user.email, "logged in");
        Ok(user)
    }
}
