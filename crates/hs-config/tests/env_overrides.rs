use figment::Jail;
use hs_config::HsConfig;
use hs_core::enums::PortalVariant;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_flow_through_full_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("HACKSPHERE_PORTAL__VARIANT", "classic");
        jail.set_env("HACKSPHERE_UPLOADS__DATASET_DELAY_MS", "5");
        jail.set_env("HACKSPHERE_API__DEFAULT_TOPIC_ID", "env-topic");

        let config = HsConfig::load().expect("config loads");
        assert_eq!(config.portal.variant, PortalVariant::Classic);
        assert_eq!(config.uploads.dataset_delay_ms, 5);
        assert_eq!(config.api.default_topic_id, "env-topic");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".hacksphere"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".hacksphere/config.toml",
            r#"
[portal]
terms_delay_ms = 1
"#,
        )?;

        let config = HsConfig::load().expect("config loads");
        assert_eq!(config.portal.terms_delay_ms, 1);
        Ok(())
    });
}
