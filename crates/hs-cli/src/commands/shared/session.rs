use anyhow::bail;
use hs_core::entities::{Team, User};
use hs_core::enums::{ArtifactSlot, Route, SessionPhase};
use hs_portal::{
    DashboardView, LoginForm, Navigation, Portal, TeamRegistrar, TermsForm, TermsView, Uploader,
};
use serde::Serialize;

use crate::cli::root_commands::Credentials;
use crate::progress::track;

/// The page a command ended on, as printed to the user.
#[derive(Debug, Serialize)]
#[serde(tag = "name", content = "view", rename_all = "snake_case")]
pub enum PageView {
    Login,
    Register,
    Terms(TermsView),
    Dashboard(Box<DashboardView>),
}

#[derive(Debug, Serialize)]
pub struct Landing {
    pub navigation: Navigation,
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    pub page: PageView,
}

impl Landing {
    pub fn capture<R: TeamRegistrar, U: Uploader>(
        portal: &Portal<R, U>,
        navigation: Navigation,
    ) -> anyhow::Result<Self> {
        let page = match navigation.route {
            Route::Login => PageView::Login,
            Route::Register => PageView::Register,
            Route::Terms => PageView::Terms(portal.terms()?),
            Route::Dashboard => PageView::Dashboard(Box::new(portal.dashboard()?)),
        };
        let session = portal.session();
        Ok(Self {
            navigation,
            phase: session.phase(),
            user: session.user().cloned(),
            team: session.team().cloned(),
            page,
        })
    }
}

/// Run the login page and, when asked, the terms page after it.
pub async fn sign_in<R: TeamRegistrar, U: Uploader>(
    portal: &mut Portal<R, U>,
    credentials: &Credentials,
    accept_terms: bool,
) -> anyhow::Result<Navigation> {
    let mut login = LoginForm::new(&credentials.email, &credentials.password);
    let mut navigation = track("Signing in...", portal.login(&mut login)).await?;

    if accept_terms && navigation.route == Route::Terms {
        let mut terms = TermsForm::new();
        terms.set_agreed(true);
        navigation = track("Accepting terms...", portal.accept_terms(&mut terms)).await?;
    }
    Ok(navigation)
}

/// Fail unless the session made it to the dashboard.
pub fn require_dashboard(navigation: &Navigation) -> anyhow::Result<()> {
    match navigation.route {
        Route::Dashboard => Ok(()),
        Route::Terms => bail!("the terms and conditions are pending; rerun with --accept-terms"),
        other => bail!("expected to reach the dashboard, landed on {other}"),
    }
}

/// Spinner message for an artifact upload.
pub const fn upload_message(slot: ArtifactSlot) -> &'static str {
    match slot {
        ArtifactSlot::ProjectFile => "Uploading project files...",
        ArtifactSlot::DemoVideo => "Uploading demo video...",
        ArtifactSlot::Dataset => "Uploading dataset...",
    }
}
