use hs_config::HsConfig;
use hs_core::enums::{PortalVariant, SessionPhase};
use hs_portal::Navigation;
use hs_portal::router;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RouteResponse {
    variant: PortalVariant,
    phase: SessionPhase,
    #[serde(flatten)]
    navigation: Navigation,
}

/// Handle `hacksphere route`.
pub fn handle(args: &RouteArgs, config: &HsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let variant = config.portal.variant;
    let phase = phase_for(args.authenticated, args.terms_accepted, variant);
    let navigation = router::navigate(&args.path, phase, variant);
    output(
        &RouteResponse {
            variant,
            phase,
            navigation,
        },
        flags.format,
    )
}

fn phase_for(authenticated: bool, terms_accepted: bool, variant: PortalVariant) -> SessionPhase {
    if !authenticated {
        SessionPhase::Unauthenticated
    } else if variant.has_terms_step() && !terms_accepted {
        SessionPhase::TermsPending
    } else {
        SessionPhase::Ready
    }
}

#[cfg(test)]
mod tests {
    use hs_core::enums::{PortalVariant, SessionPhase};
    use rstest::rstest;

    use super::phase_for;

    #[rstest]
    #[case(false, false, PortalVariant::Extended, SessionPhase::Unauthenticated)]
    #[case(true, false, PortalVariant::Extended, SessionPhase::TermsPending)]
    #[case(true, true, PortalVariant::Extended, SessionPhase::Ready)]
    #[case(true, false, PortalVariant::Classic, SessionPhase::Ready)]
    fn flags_map_to_phase(
        #[case] authenticated: bool,
        #[case] terms_accepted: bool,
        #[case] variant: PortalVariant,
        #[case] expected: SessionPhase,
    ) {
        assert_eq!(phase_for(authenticated, terms_accepted, variant), expected);
    }
}
