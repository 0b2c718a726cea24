//! Checks applied after the layered sources have been extracted.

use std::path::Path;

use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{ApiSettings, LoggingSettings, PathSettings, PurgeConfig};

impl PurgeConfig {
    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field encountered.
    pub fn validate(&self) -> ConfigResult<()> {
        self.api.validate()?;
        self.paths.validate()?;
        self.logging.validate()
    }
}

impl ApiSettings {
    /// Parse the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not `http`/`https`, or
    /// cannot carry path segments.
    pub fn base_url(&self) -> ConfigResult<Url> {
        let url = Url::parse(self.url.trim()).map_err(|_| {
            ConfigError::invalid("api", "url", Some(self.url.clone()), "not a valid URL")
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "api",
                "url",
                Some(self.url.clone()),
                "scheme must be http or https",
            ));
        }
        if url.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                "api",
                "url",
                Some(self.url.clone()),
                "URL cannot be used as a base",
            ));
        }
        Ok(url)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.base_url()?;
        if self.username.trim().is_empty() {
            return Err(ConfigError::invalid(
                "api",
                "username",
                None,
                "must not be empty",
            ));
        }
        if self.username.contains(':') {
            return Err(ConfigError::invalid(
                "api",
                "username",
                None,
                "must not contain ':'",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api",
                "timeout_secs",
                Some("0".to_string()),
                "must be positive",
            ));
        }
        if self.token.as_deref().is_some_and(|token| token.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "api",
                "token",
                None,
                "must not be blank when set",
            ));
        }
        Ok(())
    }
}

impl PathSettings {
    fn validate(&self) -> ConfigResult<()> {
        require_path("paths", "asset_file", &self.asset_file)?;
        require_path("paths", "processed_file", &self.processed_file)?;
        require_path("paths", "backup_dir", &self.backup_dir)
    }
}

impl LoggingSettings {
    fn validate(&self) -> ConfigResult<()> {
        require_path("logging", "file", &self.file)?;
        if self.level.trim().is_empty() {
            return Err(ConfigError::invalid(
                "logging",
                "level",
                None,
                "must not be empty",
            ));
        }
        if self.max_bytes == 0 {
            return Err(ConfigError::invalid(
                "logging",
                "max_bytes",
                Some("0".to_string()),
                "must be positive",
            ));
        }
        if self.max_files == 0 {
            return Err(ConfigError::invalid(
                "logging",
                "max_files",
                Some("0".to_string()),
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn require_path(section: &'static str, field: &'static str, path: &Path) -> ConfigResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::invalid(section, field, None, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PurgeConfig {
        let mut config = PurgeConfig::default();
        config.api.username = "svc-purge".to_string();
        config.api.password = "secret".to_string();
        config
    }

    fn rejected_field(config: &PurgeConfig) -> Option<(&'static str, &'static str)> {
        match config.validate() {
            Err(ConfigError::InvalidField { section, field, .. }) => Some((section, field)),
            _ => None,
        }
    }

    #[test]
    fn default_with_credentials_is_valid() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn missing_username_is_rejected() {
        assert_eq!(
            rejected_field(&PurgeConfig::default()),
            Some(("api", "username"))
        );
    }

    #[test]
    fn url_must_be_http_base() {
        for url in ["not a url", "ftp://console/api/3", "mailto:ops@example.com"] {
            let mut config = valid();
            config.api.url = url.to_string();
            assert_eq!(rejected_field(&config), Some(("api", "url")), "{url}");
        }
    }

    #[test]
    fn numeric_limits_are_enforced() {
        let mut config = valid();
        config.api.timeout_secs = 0;
        assert_eq!(rejected_field(&config), Some(("api", "timeout_secs")));

        let mut config = valid();
        config.logging.max_bytes = 0;
        assert_eq!(rejected_field(&config), Some(("logging", "max_bytes")));

        let mut config = valid();
        config.logging.max_files = 0;
        assert_eq!(rejected_field(&config), Some(("logging", "max_files")));
    }

    #[test]
    fn blank_token_and_empty_paths_are_rejected() {
        let mut config = valid();
        config.api.token = Some("  ".to_string());
        assert_eq!(rejected_field(&config), Some(("api", "token")));

        let mut config = valid();
        config.paths.asset_file = std::path::PathBuf::new();
        assert_eq!(rejected_field(&config), Some(("paths", "asset_file")));
    }
}
