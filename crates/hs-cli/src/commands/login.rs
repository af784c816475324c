use hs_config::HsConfig;
use hs_portal::Portal;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::commands::shared::session::{Landing, sign_in};
use crate::output::output;

/// Handle `hacksphere login`.
pub async fn handle(args: &LoginArgs, config: HsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portal = Portal::from_config(config)?;
    let navigation = sign_in(&mut portal, &args.credentials, false).await?;
    output(&Landing::capture(&portal, navigation)?, flags.format)
}
