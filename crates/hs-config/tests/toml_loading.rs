//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hs_config::{ConfigError, HsConfig};
use hs_core::enums::PortalVariant;
use pretty_assertions::assert_eq;

fn from_toml(path: &str) -> Result<HsConfig, ConfigError> {
    let figment = Figment::from(Serialized::defaults(HsConfig::default())).merge(Toml::file(path));
    HsConfig::from_figment(&figment)
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.hacksphere.dev"
team_create_path = "/v2/teams"
default_topic_id = "topic-42"
timeout_secs = 20
"#,
        )?;

        let config = from_toml("config.toml").expect("config loads");
        assert_eq!(config.api.team_create_url(), "https://api.hacksphere.dev/v2/teams");
        assert_eq!(config.api.default_topic_id, "topic-42");
        assert_eq!(config.api.timeout_secs, 20);
        assert_eq!(config.api.user_agent, "hacksphere/0.1");
        Ok(())
    });
}

#[test]
fn loads_portal_and_upload_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[portal]
variant = "classic"
login_delay_ms = 0

[uploads]
demo_video_delay_ms = 10
"#,
        )?;

        let config = from_toml("config.toml").expect("config loads");
        assert_eq!(config.portal.variant, PortalVariant::Classic);
        assert_eq!(config.portal.login_delay_ms, 0);
        assert_eq!(config.portal.terms_delay_ms, 800);
        assert_eq!(config.uploads.demo_video_delay_ms, 10);
        assert_eq!(config.uploads.project_file_delay_ms, 1500);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example"
"#,
        )?;
        jail.set_env("HACKSPHERE_API__BASE_URL", "https://from-env.example");

        let figment = Figment::from(Serialized::defaults(HsConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HACKSPHERE_").split("__"));
        let config = HsConfig::from_figment(&figment).expect("config loads");
        assert_eq!(config.api.base_url, "https://from-env.example");
        Ok(())
    });
}

#[test]
fn unknown_variant_is_an_extraction_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[portal]
variant = "deluxe"
"#,
        )?;

        let result = from_toml("config.toml");
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "localhost:5000"
"#,
        )?;

        let result = from_toml("config.toml");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
