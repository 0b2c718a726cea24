//! Typed configuration sections.

use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Complete configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Remote asset directory access.
    pub api: ApiSettings,
    /// Input, audit and backup locations.
    pub paths: PathSettings,
    /// Diagnostic log settings.
    pub logging: LoggingSettings,
}

/// Connection and credential settings for the asset directory API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the API, e.g. `https://console:3780/api/3`.
    pub url: String,
    /// Account used for basic authentication.
    pub username: String,
    /// Password used for basic authentication.
    pub password: String,
    /// Optional second-factor token sent in the `Token` header.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: defaults::API_URL.to_string(),
            username: String::new(),
            password: String::new(),
            token: None,
            timeout_secs: defaults::API_TIMEOUT_SECS,
        }
    }
}

impl Debug for ApiSettings {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApiSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// File locations used by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Input list of computer names.
    pub asset_file: PathBuf,
    /// Audit log of deleted computer names.
    pub processed_file: PathBuf,
    /// Directory receiving the timestamped input snapshot.
    pub backup_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            asset_file: PathBuf::from(defaults::ASSET_FILE),
            processed_file: PathBuf::from(defaults::PROCESSED_FILE),
            backup_dir: PathBuf::from(defaults::BACKUP_DIR),
        }
    }
}

/// Output format for diagnostic log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// Plain text lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Diagnostic log file.
    pub file: PathBuf,
    /// Default level filter when `RUST_LOG` is unset.
    pub level: String,
    /// Line format.
    pub format: LogFormatSetting,
    /// Size in bytes that triggers rotation.
    pub max_bytes: u64,
    /// Number of rotated files retained.
    pub max_files: usize,
    /// Mirror log lines to stderr.
    pub console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(defaults::LOG_FILE),
            level: defaults::LOG_LEVEL.to_string(),
            format: LogFormatSetting::default(),
            max_bytes: defaults::LOG_MAX_BYTES,
            max_files: defaults::LOG_MAX_FILES,
            console: false,
        }
    }
}
