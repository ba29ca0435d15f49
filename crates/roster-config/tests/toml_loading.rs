//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use roster_config::{ConfigError, RosterConfig};

#[test]
fn loads_scope_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[scope]
contract_id = 12
organization_id = 3
",
        )?;

        let config: RosterConfig = Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scope.contract_id, Some(12));
        assert_eq!(config.scope.organization_id, Some(3));
        assert!(config.scope.is_scoped());
        Ok(())
    });
}

#[test]
fn loads_output_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
format = "table"
color = true
max_width = 120
"#,
        )?;

        let config: RosterConfig = Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.format, "table");
        assert!(config.output.color);
        assert_eq!(config.output.max_width, Some(120));
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".roster")?;
        jail.create_file(
            ".roster/config.toml",
            r#"
[output]
format = "raw"
"#,
        )?;

        let config = RosterConfig::load()?;
        assert_eq!(config.output.format, "raw");
        assert!(!config.scope.is_scoped());
        Ok(())
    });
}

#[test]
fn invalid_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
format = "yaml"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RosterConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = RosterConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "output.format"
        ));
        Ok(())
    });
}
