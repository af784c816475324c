//! Portal behavior configuration: variant and simulated latencies.

use std::time::Duration;

use hs_core::enums::PortalVariant;
use serde::{Deserialize, Serialize};

const fn default_login_delay_ms() -> u64 {
    1000
}

const fn default_terms_delay_ms() -> u64 {
    800
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    /// `classic` or `extended` (terms step, dataset and note fields).
    #[serde(default)]
    pub variant: PortalVariant,

    /// Simulated sign-in latency.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Simulated terms acceptance latency.
    #[serde(default = "default_terms_delay_ms")]
    pub terms_delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            variant: PortalVariant::default(),
            login_delay_ms: default_login_delay_ms(),
            terms_delay_ms: default_terms_delay_ms(),
        }
    }
}

impl PortalConfig {
    #[must_use]
    pub const fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    #[must_use]
    pub const fn terms_delay(&self) -> Duration {
        Duration::from_millis(self.terms_delay_ms)
    }
}
