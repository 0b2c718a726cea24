//! # Design
//!
//! - Provide structured, constant-message errors for the backup and snapshot steps.
//! - Capture operation context (paths) to make failures reproducible in tests.
//! - Preserve source errors without interpolating context into error messages.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced while preparing or reading the input snapshot.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// The input list to back up does not exist.
    #[error("fsops source missing")]
    MissingSource {
        /// Path that was expected to exist.
        path: PathBuf,
    },
    /// A snapshot with the derived name already exists.
    #[error("fsops snapshot already exists")]
    SnapshotExists {
        /// Snapshot path that would have been overwritten.
        path: PathBuf,
    },
    /// IO failures while interacting with the filesystem.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Path the failure relates to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingSource { path }
            | Self::SnapshotExists { path }
            | Self::Io { path, .. } => path.as_path(),
        }
    }

    /// Message suitable for operators, including path and source context.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::MissingSource { path } | Self::SnapshotExists { path } => {
                format!("{self}: {}", path.display())
            }
            Self::Io {
                operation,
                path,
                source,
            } => format!("{self} during {operation} on {}: {source}", path.display()),
        }
    }
}
