//! Team registration API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("http://localhost:5000")
}

fn default_team_create_path() -> String {
    String::from("/api/teams/create")
}

/// Topic assigned to a team when the registrant does not pick one.
fn default_topic_id() -> String {
    String::from("698329b0910b412de07db77f")
}

fn default_user_agent() -> String {
    String::from("hacksphere/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme and host of the portal backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the team creation endpoint, relative to `base_url`.
    #[serde(default = "default_team_create_path")]
    pub team_create_path: String,

    /// Topic ID sent when the registration form leaves it blank.
    #[serde(default = "default_topic_id")]
    pub default_topic_id: String,

    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            team_create_path: default_team_create_path(),
            default_topic_id: default_topic_id(),
            timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the team creation endpoint.
    #[must_use]
    pub fn team_create_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.team_create_path
        )
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() || !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if !self.team_create_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "api.team_create_path".into(),
                reason: format!("must start with '/', got '{}'", self.team_create_path),
            });
        }
        Ok(())
    }
}
