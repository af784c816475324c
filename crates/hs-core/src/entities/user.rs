use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A signed-in participant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build the user a plain login produces: the display name is the
    /// email's local part.
    #[must_use]
    pub fn from_login_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default();
        Self::new(name, email)
    }
}
