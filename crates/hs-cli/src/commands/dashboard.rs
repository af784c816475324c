use hs_config::HsConfig;
use hs_portal::Portal;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::session::{Landing, require_dashboard, sign_in};
use crate::output::output;

/// Handle `hacksphere dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    config: HsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut portal = Portal::from_config(config)?;
    let navigation = sign_in(&mut portal, &args.credentials, args.accept_terms).await?;
    require_dashboard(&navigation)?;
    output(&Landing::capture(&portal, navigation)?, flags.format)
}
