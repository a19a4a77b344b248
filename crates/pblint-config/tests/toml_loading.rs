//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pblint_config::{ConfigError, PblintConfig, ReportFormat};
use pretty_assertions::assert_eq;

/// Point the user-global config lookup into the jail.
fn isolate_user_config(jail: &mut Jail) {
    let config_home = jail.directory().to_path_buf();
    jail.set_env("XDG_CONFIG_HOME", config_home.display());
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[lint]
import_paths = ["proto", "third_party/googleapis"]

[output]
format = "json"
"#,
        )?;

        let config: PblintConfig = Figment::from(Serialized::defaults(PblintConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.lint.import_paths,
            vec![
                PathBuf::from("proto"),
                PathBuf::from("third_party/googleapis")
            ]
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_from_cwd() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".pblint.toml",
            r#"
[lint]
import_paths = ["api"]
"#,
        )?;

        let config = PblintConfig::load().expect("config loads");
        assert_eq!(config.lint.import_paths, vec![PathBuf::from("api")]);
        assert_eq!(config.output.format, ReportFormat::Text);
        Ok(())
    });
}

#[test]
fn user_config_is_overridden_by_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir("pblint")?;
        jail.create_file(
            "pblint/config.toml",
            r#"
[lint]
import_paths = ["global"]

[output]
format = "json"
"#,
        )?;
        jail.create_file(
            ".pblint.toml",
            r#"
[lint]
import_paths = ["api"]
"#,
        )?;

        let config = PblintConfig::load().expect("config loads");
        assert_eq!(config.lint.import_paths, vec![PathBuf::from("api")]);
        assert_eq!(config.output.format, ReportFormat::Json);
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".pblint.toml",
            r#"
[output]
format = "text"
"#,
        )?;
        jail.set_env("PBLINT_OUTPUT__FORMAT", "json");

        let config = PblintConfig::load().expect("config loads");
        assert_eq!(config.output.format, ReportFormat::Json);
        Ok(())
    });
}

#[test]
fn env_sets_import_path_list() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("PBLINT_LINT__IMPORT_PATHS", "[proto, vendor]");

        let config = PblintConfig::load().expect("config loads");
        assert_eq!(
            config.lint.import_paths,
            vec![PathBuf::from("proto"), PathBuf::from("vendor")]
        );
        Ok(())
    });
}

#[test]
fn unknown_format_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("PBLINT_OUTPUT__FORMAT", "xml");

        let err = PblintConfig::load().expect_err("xml is not a report format");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn empty_import_path_fails_validation() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file(
            ".pblint.toml",
            r#"
[lint]
import_paths = [""]
"#,
        )?;

        let err = PblintConfig::load().expect_err("empty path rejected");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
