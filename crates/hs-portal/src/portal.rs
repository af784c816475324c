//! Application root: configuration, session, and the current page.

use hs_api::PortalApiClient;
use hs_config::HsConfig;
use hs_core::entities::{ArtifactFile, SubmissionReceipt};
use hs_core::enums::{ArtifactSlot, Route};

use crate::delay::SimulatedDelay;
use crate::error::PortalError;
use crate::forms::dashboard::SubmissionDraft;
use crate::forms::login::LoginForm;
use crate::forms::register::RegisterForm;
use crate::forms::terms::TermsForm;
use crate::registrar::TeamRegistrar;
use crate::router::{self, Navigation};
use crate::session::Session;
use crate::upload::{SimulatedUploader, UploadedArtifact, Uploader};
use crate::views::{DashboardView, TermsView};

/// The running portal.
///
/// Page operations check that the portal is on the page they belong to. The
/// submission draft exists only while the dashboard is the current page and
/// is discarded when the participant navigates away.
#[derive(Debug)]
pub struct Portal<R, U> {
    config: HsConfig,
    session: Session,
    route: Route,
    draft: Option<SubmissionDraft>,
    registrar: R,
    uploader: U,
}

impl Portal<PortalApiClient, SimulatedUploader> {
    /// Build a portal backed by the HTTP registrar and the simulated uploader.
    ///
    /// # Errors
    ///
    /// [`PortalError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: HsConfig) -> Result<Self, PortalError> {
        let registrar = PortalApiClient::new(&config.api)?;
        let uploader = SimulatedUploader::new(config.uploads.clone());
        Ok(Self::new(config, registrar, uploader))
    }
}

impl<R: TeamRegistrar, U: Uploader> Portal<R, U> {
    #[must_use]
    pub fn new(config: HsConfig, registrar: R, uploader: U) -> Self {
        let session = Session::new(config.portal.variant);
        let mut portal = Self {
            config,
            session,
            route: Route::Login,
            draft: None,
            registrar,
            uploader,
        };
        portal.navigate("/");
        portal
    }

    #[must_use]
    pub const fn config(&self) -> &HsConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&SubmissionDraft> {
        self.draft.as_ref()
    }

    /// Request `path` and settle on the route the guard allows.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let navigation = router::navigate(path, self.session.phase(), self.session.variant());
        self.enter(navigation.route);
        tracing::debug!(
            requested = %navigation.requested,
            route = %navigation.route,
            redirects = navigation.redirects.len(),
            "navigated"
        );
        navigation
    }

    fn enter(&mut self, route: Route) {
        if route == Route::Dashboard {
            if self.draft.is_none() {
                self.draft = Some(SubmissionDraft::new(self.session.variant()));
            }
        } else {
            self.draft = None;
        }
        self.route = route;
    }

    /// Move to wherever the session now belongs.
    fn land(&mut self) -> Navigation {
        self.navigate(router::landing(self.session.phase()).path())
    }

    fn expect_page(&self, action: &'static str, expected: Route) -> Result<(), PortalError> {
        if self.route == expected {
            Ok(())
        } else {
            Err(self.wrong_page(action, expected))
        }
    }

    const fn wrong_page(&self, action: &'static str, expected: Route) -> PortalError {
        PortalError::WrongPage {
            action,
            expected,
            current: self.route,
        }
    }

    /// Submit the login page.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the login page, otherwise whatever
    /// [`LoginForm::submit`] returns.
    pub async fn login(&mut self, form: &mut LoginForm) -> Result<Navigation, PortalError> {
        self.expect_page("login", Route::Login)?;
        let delay = SimulatedDelay::new(self.config.portal.login_delay());
        form.submit(&mut self.session, delay).await?;
        Ok(self.land())
    }

    /// Submit the registration page.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the registration page, otherwise
    /// whatever [`RegisterForm::submit`] returns.
    pub async fn register(&mut self, form: &mut RegisterForm) -> Result<Navigation, PortalError> {
        self.expect_page("registration", Route::Register)?;
        form.submit(
            &self.registrar,
            &mut self.session,
            &self.config.api.default_topic_id,
        )
        .await?;
        Ok(self.land())
    }

    /// The terms document.
    ///
    /// # Errors
    ///
    /// [`PortalError::Unavailable`] in the classic variant.
    pub fn terms(&self) -> Result<TermsView, PortalError> {
        let variant = self.session.variant();
        if !variant.has_terms_step() {
            return Err(PortalError::Unavailable {
                feature: "terms",
                variant,
            });
        }
        Ok(TermsView::new(self.session.terms_accepted()))
    }

    /// Accept the terms and move on to the dashboard.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the terms page, otherwise whatever
    /// [`TermsForm::accept`] returns.
    pub async fn accept_terms(&mut self, form: &mut TermsForm) -> Result<Navigation, PortalError> {
        self.expect_page("terms acceptance", Route::Terms)?;
        let delay = SimulatedDelay::new(self.config.portal.terms_delay());
        form.accept(&mut self.session, delay).await?;
        Ok(self.land())
    }

    fn draft_mut(&mut self, action: &'static str) -> Result<&mut SubmissionDraft, PortalError> {
        self.expect_page(action, Route::Dashboard)?;
        let variant = self.session.variant();
        Ok(self
            .draft
            .get_or_insert_with(|| SubmissionDraft::new(variant)))
    }

    /// Validate and upload a file into a submission slot.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard, otherwise whatever
    /// [`SubmissionDraft::select`] returns.
    pub async fn select_artifact(
        &mut self,
        slot: ArtifactSlot,
        file: ArtifactFile,
    ) -> Result<UploadedArtifact, PortalError> {
        self.expect_page("artifact upload", Route::Dashboard)?;
        let variant = self.session.variant();
        let draft = self
            .draft
            .get_or_insert_with(|| SubmissionDraft::new(variant));
        draft.select(slot, file, &self.uploader).await.cloned()
    }

    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard.
    pub fn remove_artifact(
        &mut self,
        slot: ArtifactSlot,
    ) -> Result<Option<UploadedArtifact>, PortalError> {
        Ok(self.draft_mut("artifact removal")?.remove(slot))
    }

    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard.
    pub fn set_github_link(&mut self, link: &str) -> Result<(), PortalError> {
        self.draft_mut("github link")?.set_github_link(link);
        Ok(())
    }

    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard and
    /// [`PortalError::Unavailable`] in the classic variant.
    pub fn set_note(&mut self, note: &str) -> Result<(), PortalError> {
        self.draft_mut("submission note")?.set_note(note)
    }

    /// Submit the project draft.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard, otherwise whatever
    /// [`SubmissionDraft::submit`] returns.
    pub fn submit_project(&mut self) -> Result<SubmissionReceipt, PortalError> {
        self.expect_page("project submission", Route::Dashboard)?;
        let user = self
            .session
            .user()
            .cloned()
            .ok_or_else(|| self.wrong_page("project submission", Route::Dashboard))?;
        let team = self.session.team().cloned();
        let variant = self.session.variant();
        self.draft
            .get_or_insert_with(|| SubmissionDraft::new(variant))
            .submit(&user, team.as_ref())
    }

    /// The dashboard page.
    ///
    /// # Errors
    ///
    /// [`PortalError::WrongPage`] off the dashboard.
    pub fn dashboard(&self) -> Result<DashboardView, PortalError> {
        self.expect_page("dashboard view", Route::Dashboard)?;
        let wrong_page = || self.wrong_page("dashboard view", Route::Dashboard);
        let user = self.session.user().ok_or_else(wrong_page)?;
        let draft = self.draft.as_ref().ok_or_else(wrong_page)?;
        Ok(DashboardView::new(
            user,
            self.session.team(),
            draft,
            self.session.variant(),
        ))
    }

    /// Sign out and return to the login page.
    pub fn logout(&mut self) -> Navigation {
        self.session.logout();
        tracing::info!("logged out");
        self.navigate(Route::Login.path())
    }
}
