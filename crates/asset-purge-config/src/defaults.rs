//! Default file locations and limits used when nothing overrides them.

pub(crate) const API_URL: &str = "https://localhost:3780/api/3";
pub(crate) const API_TIMEOUT_SECS: u64 = 30;
pub(crate) const ASSET_FILE: &str = "assets.csv";
pub(crate) const PROCESSED_FILE: &str = "processed_assets.log";
pub(crate) const BACKUP_DIR: &str = ".";
pub(crate) const LOG_FILE: &str = "asset_removal.log";
pub(crate) const LOG_LEVEL: &str = "info";
/// Rotate the diagnostic log once it would exceed 5 MiB.
pub(crate) const LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Number of rotated diagnostic logs kept next to the live file.
pub(crate) const LOG_MAX_FILES: usize = 5;
