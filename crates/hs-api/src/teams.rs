//! Team creation endpoint.

use std::fmt;

use hs_core::entities::TeamMember;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{PortalApiClient, error::ApiError, http::check_response};

/// Body of the team creation `POST`.
///
/// Serializes to the flat wire shape the backend expects, members keyed by
/// 1-based position:
///
/// ```json
/// { "teamName": "...", "topicId": "...", "teamLeaderName": "...",
///   "teamLeaderEmail": "...", "teamPassword": "...",
///   "teamMember1Name": "...", "teamMember1Email": "..." }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TeamCreateRequest {
    pub team_name: String,
    pub topic_id: String,
    pub leader_name: String,
    pub leader_email: String,
    pub password: String,
    pub members: Vec<TeamMember>,
}

impl Serialize for TeamCreateRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + self.members.len() * 2))?;
        map.serialize_entry("teamName", &self.team_name)?;
        map.serialize_entry("topicId", &self.topic_id)?;
        map.serialize_entry("teamLeaderName", &self.leader_name)?;
        map.serialize_entry("teamLeaderEmail", &self.leader_email)?;
        map.serialize_entry("teamPassword", &self.password)?;
        for (idx, member) in self.members.iter().enumerate() {
            let position = idx + 1;
            map.serialize_entry(&format!("teamMember{position}Name"), &member.name)?;
            map.serialize_entry(&format!("teamMember{position}Email"), &member.email)?;
        }
        map.end()
    }
}

impl fmt::Debug for TeamCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamCreateRequest")
            .field("team_name", &self.team_name)
            .field("topic_id", &self.topic_id)
            .field("leader_name", &self.leader_name)
            .field("leader_email", &self.leader_email)
            .field("password", &"<redacted>")
            .field("members", &self.members)
            .finish()
    }
}

/// Successful team creation. The backend's body is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamCreated {
    pub status: u16,
    pub body: serde_json::Value,
}

impl TeamCreated {
    /// The backend's `message`, when it sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }
}

impl PortalApiClient {
    /// Create a team.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request cannot be sent,
    /// [`ApiError::Api`] on a non-success status (carrying the body's `message`),
    /// and [`ApiError::Parse`] if a success body is not JSON.
    pub async fn create_team(&self, request: &TeamCreateRequest) -> Result<TeamCreated, ApiError> {
        tracing::debug!(
            url = %self.team_create_url,
            team = %request.team_name,
            members = request.members.len(),
            "posting team registration"
        );

        let resp = self
            .http
            .post(&self.team_create_url)
            .json(request)
            .send()
            .await;
        let resp = match resp {
            Ok(resp) => resp,
            Err(error) => {
                tracing::warn!(%error, "team registration request failed");
                return Err(error.into());
            }
        };

        let resp = check_response(resp).await.inspect_err(|error| {
            tracing::warn!(%error, "team registration rejected");
        })?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        let body = serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;

        tracing::info!(team = %request.team_name, status, "team registered");
        Ok(TeamCreated { status, body })
    }
}
