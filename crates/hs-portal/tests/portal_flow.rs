//! Page-to-page flows through the `Portal` root with in-memory seams.

use std::cell::RefCell;

use hs_api::{ApiError, TeamCreateRequest, TeamCreated};
use hs_config::{HsConfig, PortalConfig, UploadsConfig};
use hs_core::entities::{ArtifactFile, TeamMember};
use hs_core::enums::{ArtifactSlot, PortalVariant, Route, SessionPhase};
use hs_portal::{
    LoginForm, Portal, PortalError, RegisterForm, SUBMITTED_MESSAGE, SimulatedUploader, TermsForm,
    TeamRegistrar,
};
use hs_validate::Field;
use pretty_assertions::assert_eq;

/// Registrar that records requests and answers with a fixed outcome.
struct FakeRegistrar {
    reject_with: Option<(u16, &'static str)>,
    seen: RefCell<Vec<TeamCreateRequest>>,
}

impl FakeRegistrar {
    fn accepting() -> Self {
        Self {
            reject_with: None,
            seen: RefCell::new(Vec::new()),
        }
    }

    fn rejecting(status: u16, message: &'static str) -> Self {
        Self {
            reject_with: Some((status, message)),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl TeamRegistrar for FakeRegistrar {
    async fn register_team(&self, request: &TeamCreateRequest) -> Result<TeamCreated, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        match self.reject_with {
            Some((status, message)) => Err(ApiError::Api {
                status,
                message: message.to_string(),
            }),
            None => Ok(TeamCreated {
                status: 201,
                body: serde_json::json!({ "message": "Team created" }),
            }),
        }
    }
}

fn instant_config(variant: PortalVariant) -> HsConfig {
    HsConfig {
        portal: PortalConfig {
            variant,
            login_delay_ms: 0,
            terms_delay_ms: 0,
        },
        uploads: UploadsConfig::instant(),
        ..HsConfig::default()
    }
}

fn portal(
    variant: PortalVariant,
    registrar: FakeRegistrar,
) -> Portal<FakeRegistrar, SimulatedUploader> {
    Portal::new(
        instant_config(variant),
        registrar,
        SimulatedUploader::instant(),
    )
}

fn registration() -> RegisterForm {
    let mut form = RegisterForm::new();
    form.team_name = "Borrow Checkers".into();
    form.name = "Ferris".into();
    form.email = "ferris@example.com".into();
    form.password = "crab-rave".into();
    form
}

#[test]
fn portal_starts_on_login() {
    let portal = portal(PortalVariant::Extended, FakeRegistrar::accepting());
    assert_eq!(portal.route(), Route::Login);
    assert!(portal.draft().is_none());
}

#[tokio::test]
async fn extended_login_goes_through_terms_to_dashboard() {
    let mut portal = portal(PortalVariant::Extended, FakeRegistrar::accepting());
    let mut login = LoginForm::new("ada@example.com", "analytical");
    let nav = portal.login(&mut login).await.unwrap();
    assert_eq!(nav.route, Route::Terms);

    assert_eq!(portal.navigate("/dashboard").route, Route::Terms);

    let mut terms = TermsForm::new();
    terms.set_agreed(true);
    let nav = portal.accept_terms(&mut terms).await.unwrap();
    assert_eq!(nav.route, Route::Dashboard);
    assert_eq!(portal.session().phase(), SessionPhase::Ready);

    let view = portal.dashboard().unwrap();
    assert_eq!(view.welcome, "Welcome back, ada!");
    assert!(view.team.is_none());
}

#[tokio::test]
async fn classic_login_lands_on_dashboard() {
    let mut portal = portal(PortalVariant::Classic, FakeRegistrar::accepting());
    let mut login = LoginForm::new("ada@example.com", "analytical");
    let nav = portal.login(&mut login).await.unwrap();
    assert_eq!(nav.route, Route::Dashboard);
    assert!(portal.terms().is_err());
}

#[tokio::test]
async fn rejected_registration_shows_banner_and_keeps_session() {
    let mut portal = portal(
        PortalVariant::Extended,
        FakeRegistrar::rejecting(400, "Team exists"),
    );
    portal.navigate("/register");
    let mut form = registration();

    let err = portal.register(&mut form).await.unwrap_err();
    assert!(matches!(err, PortalError::RegistrationFailed { ref message } if message == "Team exists"));
    assert_eq!(form.banner(), Some("Team exists"));
    assert!(!form.is_loading());
    assert_eq!(portal.session().phase(), SessionPhase::Unauthenticated);
    assert_eq!(portal.route(), Route::Register);

    form.dismiss_banner();
    assert!(form.banner().is_none());
}

#[tokio::test]
async fn group_registration_posts_members_and_shows_team_card() {
    let mut portal = portal(PortalVariant::Classic, FakeRegistrar::accepting());
    portal.navigate("/register");
    let mut form = registration();
    form.set_group(true);
    form.set_group_size(3).unwrap();
    form.set_member(0, "Corro", "corro@example.com").unwrap();
    form.set_member(1, "Bors", "bors@example.com").unwrap();

    let nav = portal.register(&mut form).await.unwrap();
    assert_eq!(nav.route, Route::Dashboard);

    let team = portal.session().team().cloned().unwrap();
    assert_eq!(team.size, 3);
    assert_eq!(team.members[1], TeamMember::new("Bors", "bors@example.com"));

    let card = portal.dashboard().unwrap().team.unwrap();
    assert_eq!(card.size, 3);
    assert_eq!(card.status, "Active");
}

#[tokio::test]
async fn invalid_registration_records_field_errors() {
    let mut portal = portal(PortalVariant::Extended, FakeRegistrar::accepting());
    portal.navigate("/register");
    let mut form = registration();
    form.email = "ferris".into();

    let err = portal.register(&mut form).await.unwrap_err();
    assert!(matches!(err, PortalError::Validation { .. }));
    assert!(form.errors().contains(Field::Email));
}

#[tokio::test]
async fn dashboard_submission_round() {
    let mut portal = portal(PortalVariant::Classic, FakeRegistrar::accepting());
    let mut login = LoginForm::new("ada@example.com", "analytical");
    portal.login(&mut login).await.unwrap();

    let err = portal.submit_project().unwrap_err();
    match err {
        PortalError::Validation { messages, .. } => assert_eq!(
            messages,
            vec![
                "GitHub repository link is required".to_string(),
                "Please upload your project files".to_string(),
            ]
        ),
        other => panic!("expected validation error, got {other:?}"),
    }

    portal
        .select_artifact(
            ArtifactSlot::ProjectFile,
            ArtifactFile::new("engine.zip", 2048, "application/zip"),
        )
        .await
        .unwrap();
    portal
        .set_github_link("https://github.com/ada/engine")
        .unwrap();
    let receipt = portal.submit_project().unwrap();
    assert_eq!(receipt.message, SUBMITTED_MESSAGE);
    assert_eq!(receipt.participant, "ada@example.com");
    assert!(portal.dashboard().unwrap().draft.errors.is_empty());
}

#[tokio::test]
async fn leaving_the_dashboard_discards_the_draft() {
    let mut portal = portal(PortalVariant::Classic, FakeRegistrar::accepting());
    let mut login = LoginForm::new("ada@example.com", "analytical");
    portal.login(&mut login).await.unwrap();
    portal.set_github_link("https://github.com/ada/engine").unwrap();

    let nav = portal.logout();
    assert_eq!(nav.route, Route::Login);
    assert!(portal.draft().is_none());
    assert!(portal.set_github_link("x").is_err());
}

#[tokio::test]
async fn page_actions_require_their_page() {
    let mut portal = portal(PortalVariant::Extended, FakeRegistrar::accepting());
    let mut form = registration();
    let err = portal.register(&mut form).await.unwrap_err();
    assert!(matches!(
        err,
        PortalError::WrongPage {
            expected: Route::Register,
            current: Route::Login,
            ..
        }
    ));
    assert!(portal.dashboard().is_err());
}

#[tokio::test]
async fn blank_topic_falls_back_to_default() {
    let registrar = FakeRegistrar::accepting();
    let mut session = hs_portal::Session::new(PortalVariant::Extended);
    let mut form = registration();
    form.set_group(true);
    form.set_member(0, "Corro", "corro@example.com").unwrap();

    form.submit(&registrar, &mut session, "698329b0910b412de07db77f")
        .await
        .unwrap();

    let seen = registrar.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].topic_id, "698329b0910b412de07db77f");
    assert_eq!(seen[0].members, vec![TeamMember::new("Corro", "corro@example.com")]);
    assert_eq!(session.phase(), SessionPhase::TermsPending);
}
