use anyhow::Context;
use hs_config::HsConfig;
use hs_portal::Portal;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{Credentials, TermsArgs};
use crate::commands::shared::session::{Landing, sign_in};
use crate::output::output;

/// Handle `hacksphere terms`.
pub async fn handle(args: &TermsArgs, config: HsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portal = Portal::from_config(config)?;
    let document = portal.terms()?;
    if !args.accept {
        return output(&document, flags.format);
    }

    let credentials = Credentials {
        email: args.email.clone().context("--accept needs --email")?,
        password: args.password.clone().context("--accept needs --password")?,
    };
    let navigation = sign_in(&mut portal, &credentials, true).await?;
    output(&Landing::capture(&portal, navigation)?, flags.format)
}
