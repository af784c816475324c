//! Seam between the registration form and the team creation endpoint.

use std::future::Future;

use hs_api::{ApiError, PortalApiClient, TeamCreateRequest, TeamCreated};

/// Creates teams on behalf of the registration form.
pub trait TeamRegistrar {
    fn register_team(
        &self,
        request: &TeamCreateRequest,
    ) -> impl Future<Output = Result<TeamCreated, ApiError>>;
}

impl TeamRegistrar for PortalApiClient {
    async fn register_team(&self, request: &TeamCreateRequest) -> Result<TeamCreated, ApiError> {
        self.create_team(request).await
    }
}
