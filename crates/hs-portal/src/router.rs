//! Navigation guard.
//!
//! [`ACCESS`] lists, per route, the session phases allowed to render it. A
//! disallowed request is redirected: signed-out sessions to `/login`,
//! signed-in sessions to their landing page. `/`, unknown paths, and `/terms`
//! in the classic variant redirect to `/login`.

use hs_core::enums::{PortalVariant, Route, SessionPhase};
use serde::Serialize;

/// Which session phases may render each route.
pub const ACCESS: &[(Route, &[SessionPhase])] = &[
    (Route::Login, &[SessionPhase::Unauthenticated]),
    (Route::Register, &[SessionPhase::Unauthenticated]),
    (Route::Terms, &[SessionPhase::TermsPending]),
    (Route::Dashboard, &[SessionPhase::Ready]),
];

/// Upper bound on redirects followed by [`navigate`].
const MAX_HOPS: usize = 4;

/// One guard decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "route", rename_all = "snake_case")]
pub enum Decision {
    Render(Route),
    Redirect(Route),
}

/// Result of following the guard until a page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub requested: String,
    pub redirects: Vec<Route>,
    pub route: Route,
}

impl Navigation {
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// The page a session in `phase` belongs on.
#[must_use]
pub const fn landing(phase: SessionPhase) -> Route {
    match phase {
        SessionPhase::Unauthenticated => Route::Login,
        SessionPhase::TermsPending => Route::Terms,
        SessionPhase::Ready => Route::Dashboard,
    }
}

/// Whether `route` may render for a session in `phase`.
#[must_use]
pub fn is_permitted(route: Route, phase: SessionPhase) -> bool {
    ACCESS
        .iter()
        .find(|(r, _)| *r == route)
        .is_some_and(|(_, phases)| phases.contains(&phase))
}

/// Decide a single hop for `path`.
#[must_use]
pub fn guard(path: &str, phase: SessionPhase, variant: PortalVariant) -> Decision {
    let route = match Route::from_path(path) {
        Some(Route::Terms) if !variant.has_terms_step() => None,
        other => other,
    };
    let Some(route) = route else {
        return Decision::Redirect(Route::Login);
    };
    if is_permitted(route, phase) {
        Decision::Render(route)
    } else {
        Decision::Redirect(landing(phase))
    }
}

/// Follow guard decisions from `path` until a route renders.
#[must_use]
pub fn navigate(path: &str, phase: SessionPhase, variant: PortalVariant) -> Navigation {
    let mut redirects = Vec::new();
    let mut current = guard(path, phase, variant);
    loop {
        match current {
            Decision::Render(route) => {
                return Navigation {
                    requested: path.to_string(),
                    redirects,
                    route,
                };
            }
            Decision::Redirect(target) => {
                redirects.push(target);
                if redirects.len() >= MAX_HOPS {
                    tracing::warn!(path, ?redirects, "redirect chain did not settle");
                    return Navigation {
                        requested: path.to_string(),
                        redirects,
                        route: target,
                    };
                }
                current = guard(target.path(), phase, variant);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use SessionPhase::{Ready, TermsPending, Unauthenticated};

    #[rstest]
    #[case("/login", Unauthenticated, Decision::Render(Route::Login))]
    #[case("/register", Unauthenticated, Decision::Render(Route::Register))]
    #[case("/dashboard", Unauthenticated, Decision::Redirect(Route::Login))]
    #[case("/terms", Unauthenticated, Decision::Redirect(Route::Login))]
    #[case("/login", TermsPending, Decision::Redirect(Route::Terms))]
    #[case("/dashboard", TermsPending, Decision::Redirect(Route::Terms))]
    #[case("/terms", TermsPending, Decision::Render(Route::Terms))]
    #[case("/register", Ready, Decision::Redirect(Route::Dashboard))]
    #[case("/terms", Ready, Decision::Redirect(Route::Dashboard))]
    #[case("/dashboard", Ready, Decision::Render(Route::Dashboard))]
    #[case("/", Ready, Decision::Redirect(Route::Login))]
    #[case("/nope", Unauthenticated, Decision::Redirect(Route::Login))]
    fn extended_guard_table(
        #[case] path: &str,
        #[case] phase: SessionPhase,
        #[case] expected: Decision,
    ) {
        assert_eq!(guard(path, phase, PortalVariant::Extended), expected);
    }

    #[test]
    fn classic_has_no_terms_route() {
        assert_eq!(
            guard("/terms", Ready, PortalVariant::Classic),
            Decision::Redirect(Route::Login)
        );
        let nav = navigate("/terms", Ready, PortalVariant::Classic);
        assert_eq!(nav.redirects, vec![Route::Login, Route::Dashboard]);
        assert_eq!(nav.route, Route::Dashboard);
    }

    #[test]
    fn unknown_path_when_signed_out_lands_on_login() {
        let nav = navigate("/admin", Unauthenticated, PortalVariant::Extended);
        assert_eq!(nav.route, Route::Login);
        assert_eq!(nav.redirects, vec![Route::Login]);
        assert!(nav.was_redirected());
    }

    #[test]
    fn root_when_ready_follows_through_login() {
        let nav = navigate("/", Ready, PortalVariant::Extended);
        assert_eq!(nav.redirects, vec![Route::Login, Route::Dashboard]);
        assert_eq!(nav.route, Route::Dashboard);
    }

    #[test]
    fn permitted_route_renders_without_redirects() {
        let nav = navigate("/dashboard", Ready, PortalVariant::Classic);
        assert!(!nav.was_redirected());
        assert_eq!(nav.route, Route::Dashboard);
    }

    #[test]
    fn every_phase_has_a_landing_it_may_render() {
        for phase in [Unauthenticated, TermsPending, Ready] {
            assert!(is_permitted(landing(phase), phase));
        }
    }
}
