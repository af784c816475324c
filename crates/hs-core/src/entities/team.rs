use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Smallest team that counts as a group (leader plus one member).
pub const MIN_GROUP_SIZE: u8 = 2;

/// Largest team, leader included.
pub const MAX_TEAM_SIZE: u8 = 4;

/// A team member other than the leader.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
}

impl TeamMember {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A registered team.
///
/// `size` counts the leader. A solo registration is `is_group = false`,
/// `size = 1`, no members; a group has `size - 1` member entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub is_group: bool,
    pub size: u8,
    pub members: Vec<TeamMember>,
}

impl Team {
    #[must_use]
    pub fn solo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_group: false,
            size: 1,
            members: Vec::new(),
        }
    }

    /// Build a group team from its non-leader members.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the member count does not give a
    /// team size between 2 and 4.
    pub fn group(name: impl Into<String>, members: Vec<TeamMember>) -> Result<Self, CoreError> {
        let size = u8::try_from(members.len() + 1)
            .map_err(|_| CoreError::Validation(format!("too many team members: {}", members.len())))?;
        let team = Self {
            name: name.into(),
            is_group: true,
            size,
            members,
        };
        team.check()?;
        Ok(team)
    }

    /// Verify the size/member invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first broken invariant.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.is_group {
            if !(MIN_GROUP_SIZE..=MAX_TEAM_SIZE).contains(&self.size) {
                return Err(CoreError::Validation(format!(
                    "group size must be between {MIN_GROUP_SIZE} and {MAX_TEAM_SIZE}, got {}",
                    self.size
                )));
            }
            if self.members.len() != usize::from(self.size - 1) {
                return Err(CoreError::Validation(format!(
                    "group of {} needs {} members, got {}",
                    self.size,
                    self.size - 1,
                    self.members.len()
                )));
            }
        } else if self.size != 1 || !self.members.is_empty() {
            return Err(CoreError::Validation(
                "solo team must have size 1 and no members".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn group_of_three() {
        let team = Team::group(
            "Rustaceans",
            vec![
                TeamMember::new("Bo", "bo@example.com"),
                TeamMember::new("Cy", "cy@example.com"),
            ],
        )
        .unwrap();
        assert!(team.is_group);
        assert_eq!(team.size, 3);
    }

    #[test]
    fn group_without_members_is_rejected() {
        let err = Team::group("Lonely", Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn group_of_five_is_rejected() {
        let members = (0..4)
            .map(|i| TeamMember::new(format!("m{i}"), format!("m{i}@example.com")))
            .collect();
        assert!(Team::group("Crowd", members).is_err());
    }

    #[test]
    fn solo_team_passes_check() {
        assert!(Team::solo("Just me").check().is_ok());
    }

    #[test]
    fn inconsistent_group_fails_check() {
        let team = Team {
            name: "Broken".into(),
            is_group: true,
            size: 3,
            members: vec![TeamMember::default()],
        };
        assert!(team.check().is_err());
    }
}
