use anyhow::Context;
use hs_config::HsConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, the layered config, and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HsConfig> {
    let mut config =
        HsConfig::load_with_dotenv().context("failed to load hacksphere configuration")?;

    if let Some(variant) = flags.variant {
        tracing::debug!(%variant, configured = %config.portal.variant, "variant overridden");
        config.portal.variant = variant;
    }
    Ok(config)
}
