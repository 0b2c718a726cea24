//! Loads configuration from defaults, a TOML file and the environment.
//!
//! # Design
//! - Later sources win: defaults, then the TOML file, then `ASSET_PURGE__*`
//!   variables with `__` separating nested keys.
//! - A missing TOML file is not an error; credentials may come from the
//!   environment alone.
//! - Validation runs once after extraction.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::error::{ConfigError, ConfigResult};
use crate::model::PurgeConfig;

/// Configuration file read when no other path is given.
pub const DEFAULT_CONFIG_PATH: &str = "asset-purge.toml";
/// Prefix for environment overrides, e.g. `ASSET_PURGE__API__PASSWORD`.
pub const ENV_PREFIX: &str = "ASSET_PURGE__";

/// Build the layered source stack without extracting it.
#[must_use]
pub fn layered(path: &Path) -> Figment {
    Figment::from(Serialized::defaults(PurgeConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load and validate the configuration rooted at `path`.
///
/// # Errors
///
/// Returns an error if a source cannot be parsed or a field is invalid.
pub fn load(path: &Path) -> ConfigResult<PurgeConfig> {
    let config: PurgeConfig = layered(path)
        .extract()
        .map_err(|err| ConfigError::Load {
            source: Box::new(err),
        })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use figment::Jail;

    use super::*;
    use crate::model::LogFormatSetting;

    #[test]
    fn file_values_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_PATH,
                r#"
                [api]
                url = "https://console.example:3780/api/3"
                username = "svc-purge"
                password = "secret"
                token = "123456"

                [paths]
                asset_file = "input/hosts.csv"

                [logging]
                format = "json"
                max_files = 2
                "#,
            )?;

            let config = load(Path::new(DEFAULT_CONFIG_PATH)).map_err(|err| err.detail())?;
            assert_eq!(config.api.url, "https://console.example:3780/api/3");
            assert_eq!(config.api.token.as_deref(), Some("123456"));
            assert_eq!(config.paths.asset_file, PathBuf::from("input/hosts.csv"));
            assert_eq!(
                config.paths.processed_file,
                PathBuf::from("processed_assets.log")
            );
            assert_eq!(config.logging.format, LogFormatSetting::Json);
            assert_eq!(config.logging.max_files, 2);
            assert_eq!(config.logging.max_bytes, 5 * 1024 * 1024);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_PATH,
                r#"
                [api]
                username = "from-file"
                password = "file-secret"
                "#,
            )?;
            jail.set_env("ASSET_PURGE__API__PASSWORD", "env-secret");
            jail.set_env("ASSET_PURGE__API__TIMEOUT_SECS", "5");
            jail.set_env("ASSET_PURGE__LOGGING__CONSOLE", "true");

            let config = load(Path::new(DEFAULT_CONFIG_PATH)).map_err(|err| err.detail())?;
            assert_eq!(config.api.username, "from-file");
            assert_eq!(config.api.password, "env-secret");
            assert_eq!(config.api.timeout_secs, 5);
            assert!(config.logging.console);
            Ok(())
        });
    }

    #[test]
    fn missing_file_uses_environment_only() {
        Jail::expect_with(|jail| {
            jail.set_env("ASSET_PURGE__API__USERNAME", "svc-purge");

            let config = load(Path::new("absent.toml")).map_err(|err| err.detail())?;
            assert_eq!(config.api.username, "svc-purge");
            assert_eq!(config.paths.asset_file, PathBuf::from("assets.csv"));
            Ok(())
        });
    }

    #[test]
    fn unknown_log_format_fails_extraction() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_PATH,
                r#"
                [api]
                username = "svc-purge"

                [logging]
                format = "xml"
                "#,
            )?;

            let result = load(Path::new(DEFAULT_CONFIG_PATH));
            assert!(matches!(result, Err(ConfigError::Load { .. })));
            Ok(())
        });
    }

    #[test]
    fn invalid_values_fail_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("ASSET_PURGE__API__USERNAME", "svc-purge");
            jail.set_env("ASSET_PURGE__API__URL", "ftp://console/api/3");

            let result = load(Path::new(DEFAULT_CONFIG_PATH));
            assert!(matches!(
                result,
                Err(ConfigError::InvalidField {
                    section: "api",
                    field: "url",
                    ..
                })
            ));
            Ok(())
        });
    }
}
