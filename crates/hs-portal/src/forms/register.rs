//! Registration page state.
//!
//! Group mode is a small state machine. Off means no member slots. On means
//! `group_size - 1` slots, created empty when group mode is switched on.
//! Resizing keeps the values of slots whose index survives.

use hs_api::TeamCreateRequest;
use hs_core::entities::{MAX_TEAM_SIZE, MIN_GROUP_SIZE, Team, TeamMember, User};
use hs_validate::{
    Field, FieldIssue, validate_email, validate_password, validate_required,
};
use serde::Serialize;

use super::FieldErrors;
use super::busy::Busy;
use crate::error::PortalError;
use crate::registrar::TeamRegistrar;
use crate::session::Session;

/// Inline errors for one member slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<FieldIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldIssue>,
}

impl MemberErrors {
    fn validate(member: &TeamMember) -> Self {
        Self {
            name: FieldIssue::check(Field::MemberName, validate_required(&member.name)).err(),
            email: FieldIssue::check(Field::MemberEmail, validate_email(&member.email)).err(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub team_name: String,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    /// Submitted topic; blank falls back to the configured default.
    pub topic_id: Option<String>,
    is_group: bool,
    group_size: u8,
    members: Vec<TeamMember>,
    errors: FieldErrors,
    member_errors: Vec<MemberErrors>,
    banner: Option<String>,
    loading: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            name: String::new(),
            email: String::new(),
            password: String::new(),
            topic_id: None,
            is_group: false,
            group_size: MIN_GROUP_SIZE,
            members: Vec::new(),
            errors: FieldErrors::new(),
            member_errors: Vec::new(),
            banner: None,
            loading: false,
        }
    }
}

impl RegisterForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_group(&self) -> bool {
        self.is_group
    }

    #[must_use]
    pub const fn group_size(&self) -> u8 {
        self.group_size
    }

    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn member_errors(&self) -> &[MemberErrors] {
        &self.member_errors
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    fn member_slots(&self) -> usize {
        usize::from(self.group_size - 1)
    }

    /// Switch group mode. Turning it on creates fresh empty slots; turning it
    /// off drops them. Setting the current mode again is a no-op.
    pub fn set_group(&mut self, on: bool) {
        if self.is_group == on {
            return;
        }
        self.is_group = on;
        self.members = if on {
            vec![TeamMember::default(); self.member_slots()]
        } else {
            Vec::new()
        };
        self.member_errors.clear();
    }

    /// Change the group size, keeping entered values for surviving slots.
    ///
    /// # Errors
    ///
    /// [`PortalError::InvalidGroupSize`] outside `2..=4`.
    pub fn set_group_size(&mut self, size: u8) -> Result<(), PortalError> {
        if !(MIN_GROUP_SIZE..=MAX_TEAM_SIZE).contains(&size) {
            return Err(PortalError::InvalidGroupSize(size));
        }
        self.group_size = size;
        if self.is_group {
            self.members.resize_with(self.member_slots(), TeamMember::default);
            self.member_errors.truncate(self.members.len());
        }
        Ok(())
    }

    /// Mutable access to one member slot.
    ///
    /// # Errors
    ///
    /// [`PortalError::NoMemberSlot`] when `index` is out of range.
    pub fn member_mut(&mut self, index: usize) -> Result<&mut TeamMember, PortalError> {
        self.members
            .get_mut(index)
            .ok_or(PortalError::NoMemberSlot(index))
    }

    /// Fill one member slot.
    ///
    /// # Errors
    ///
    /// [`PortalError::NoMemberSlot`] when `index` is out of range.
    pub fn set_member(
        &mut self,
        index: usize,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), PortalError> {
        *self.member_mut(index)? = TeamMember::new(name, email);
        Ok(())
    }

    /// Validate top-level fields and, in group mode, every member slot.
    pub fn validate(&mut self) -> bool {
        self.errors.clear_all();
        let mut ok = self
            .errors
            .apply(Field::TeamName, validate_required(&self.team_name));
        ok &= self
            .errors
            .apply(Field::LeaderName, validate_required(&self.name));
        ok &= self.errors.apply(Field::Email, validate_email(&self.email));
        ok &= self
            .errors
            .apply(Field::Password, validate_password(&self.password));

        self.member_errors = if self.is_group {
            self.members.iter().map(MemberErrors::validate).collect()
        } else {
            Vec::new()
        };
        ok && self.member_errors.iter().all(MemberErrors::is_empty)
    }

    fn error_messages(&self) -> Vec<String> {
        let mut messages = self.errors.messages();
        for (index, errors) in self.member_errors.iter().enumerate() {
            for issue in [&errors.name, &errors.email].into_iter().flatten() {
                messages.push(format!("member {}: {issue}", index + 1));
            }
        }
        messages
    }

    /// The payload posted to the team creation endpoint.
    #[must_use]
    pub fn build_request(&self, default_topic: &str) -> TeamCreateRequest {
        let topic_id = self
            .topic_id
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .unwrap_or(default_topic);
        TeamCreateRequest {
            team_name: self.team_name.clone(),
            topic_id: topic_id.to_string(),
            leader_name: self.name.clone(),
            leader_email: self.email.clone(),
            password: self.password.clone(),
            members: if self.is_group {
                self.members.clone()
            } else {
                Vec::new()
            },
        }
    }

    fn team(&self) -> Result<Team, PortalError> {
        if self.is_group {
            Ok(Team::group(self.team_name.clone(), self.members.clone())?)
        } else {
            Ok(Team::solo(self.team_name.clone()))
        }
    }

    /// Validate, create the team remotely, then register the session.
    ///
    /// A rejected call sets the banner and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// [`PortalError::Validation`] for invalid fields,
    /// [`PortalError::RegistrationFailed`] when the call fails, and
    /// [`PortalError::Busy`] while a previous submit is running.
    pub async fn submit<R: TeamRegistrar>(
        &mut self,
        registrar: &R,
        session: &mut Session,
        default_topic: &str,
    ) -> Result<Team, PortalError> {
        if self.loading {
            return Err(PortalError::Busy("registration"));
        }
        self.banner = None;
        if !self.validate() {
            tracing::warn!(
                errors = self.errors.len(),
                members = self.member_errors.iter().filter(|e| !e.is_empty()).count(),
                "registration rejected"
            );
            return Err(PortalError::Validation {
                form: "registration",
                messages: self.error_messages(),
            });
        }

        let request = self.build_request(default_topic);
        let team = self.team()?;

        let outcome = {
            let _busy = Busy::hold(&mut self.loading);
            registrar.register_team(&request).await
        };

        match outcome {
            Ok(created) => {
                tracing::info!(
                    team = %team.name,
                    status = created.status,
                    "team registered"
                );
                session.register(User::new(self.name.clone(), self.email.clone()), team.clone())?;
                Ok(team)
            }
            Err(err) => {
                let message = err.banner_message();
                tracing::warn!(error = %err, "team registration failed");
                self.banner = Some(message.clone());
                Err(PortalError::RegistrationFailed { message })
            }
        }
    }
}
