//! # hs-api
//!
//! HTTP client for the HackSphere backend.
//!
//! The portal makes exactly one real network call: a JSON `POST` that creates a
//! team from the registration form. Everything else in the portal is local.

pub mod teams;

mod error;
mod http;

pub use error::{ApiError, REJECTED_FALLBACK, TRANSPORT_FALLBACK};
pub use teams::{TeamCreateRequest, TeamCreated};

use hs_config::ApiConfig;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the portal backend.
#[derive(Debug, Clone)]
pub struct PortalApiClient {
    http: reqwest::Client,
    team_create_url: String,
}

impl PortalApiClient {
    /// Create a client for the endpoints described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            team_create_url: config.team_create_url(),
        })
    }

    /// The URL team registrations are posted to.
    #[must_use]
    pub fn team_create_url(&self) -> &str {
        &self.team_create_url
    }
}
