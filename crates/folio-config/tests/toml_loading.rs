//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use folio_config::FolioConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
root = "docs"
default_format = "json"

[check]
strict = true
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.root, "docs");
        assert_eq!(config.general.default_format, "json");
        assert!(config.check.strict);
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[check]
strict = false
"#,
        )?;
        jail.set_env("FOLIO_CHECK__STRICT", "true");
        jail.set_env("FOLIO_GENERAL__ROOT", "context");

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FOLIO_").split("__"))
            .extract()?;

        assert!(config.check.strict);
        assert_eq!(config.general.root, "context");
        Ok(())
    });
}

#[test]
fn missing_files_fall_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("does-not-exist.toml"))
            .extract()?;

        assert_eq!(config.general.root, ".");
        assert!(!config.check.strict);
        Ok(())
    });
}
