//! Append-only audit log of deleted identifiers.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use asset_purge_core::AuditTrail;
use chrono::{DateTime, Local, TimeZone};

/// `ctime`-style timestamp, e.g. `Mon Oct 19 14:03:11 2026`.
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Audit log file; every entry is appended, nothing is rewritten.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Audit log stored at `path`. The file is created on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the audit log.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `identifier,timestamp` for the given instant.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append_at<Tz>(&self, identifier: &str, at: &DateTime<Tz>) -> io::Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(identifier, at).as_bytes())
    }
}

impl AuditTrail for AuditLog {
    fn record_deletion(&mut self, identifier: &str) -> io::Result<()> {
        self.append_at(identifier, &Local::now())
    }
}

/// Render one audit line, including the trailing newline.
#[must_use]
pub fn format_entry<Tz>(identifier: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{identifier},{}\n", at.format(AUDIT_TIMESTAMP_FORMAT))
}
