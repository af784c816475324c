//! # hs-config
//!
//! Layered configuration loading for the HackSphere portal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HACKSPHERE_*` prefix, `__` as separator)
//! 2. Project-level `.hacksphere/config.toml`
//! 3. User-level `~/.config/hacksphere/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HACKSPHERE_API__BASE_URL` -> `api.base_url`,
//! `HACKSPHERE_PORTAL__VARIANT` -> `portal.variant`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hs_config::HsConfig;
//!
//! let config = HsConfig::load_with_dotenv().expect("config");
//! println!("registering teams at {}", config.api.team_create_url());
//! ```

mod api;
mod error;
mod portal;
mod uploads;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use portal::PortalConfig;
pub use uploads::UploadsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
}

impl HsConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can inspect it or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".hacksphere/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HACKSPHERE_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hacksphere").join("config.toml"))
    }
}
