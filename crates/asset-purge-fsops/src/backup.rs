//! Moves the input list aside into a timestamped snapshot before processing.
//!
//! # Design
//! - The snapshot is produced by a rename, so the original path is gone once
//!   the backup succeeds and the snapshot becomes the only source of records.
//! - Any failure here is fatal for the run.

use std::fs;
use std::path::{Path, PathBuf};

use asset_purge_core::AssetRecord;
use chrono::Utc;
use tracing::info;

use crate::error::{FsOpsError, FsOpsResult};
use crate::records::read_records;

const SNAPSHOT_PREFIX: &str = "backup_";
const SNAPSHOT_EXTENSION: &str = "csv";

/// Frozen copy of the input list that a run reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSnapshot {
    path: PathBuf,
    created_at: i64,
}

impl BackupSnapshot {
    /// Location of the snapshot on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unix timestamp (seconds) embedded in the snapshot name.
    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Read the identifiers stored in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn read_records(&self) -> FsOpsResult<Vec<AssetRecord>> {
        read_records(&self.path)
    }
}

/// Snapshot path derived from a Unix timestamp.
#[must_use]
pub fn snapshot_path(backup_dir: &Path, timestamp: i64) -> PathBuf {
    backup_dir.join(format!("{SNAPSHOT_PREFIX}{timestamp}.{SNAPSHOT_EXTENSION}"))
}

/// Move `source` into a snapshot named after the current time.
///
/// # Errors
///
/// Returns an error if the source is missing, the snapshot already exists, or
/// the move fails.
pub fn create_backup(source: &Path, backup_dir: &Path) -> FsOpsResult<BackupSnapshot> {
    create_backup_at(source, backup_dir, Utc::now().timestamp())
}

/// Move `source` into the snapshot for `timestamp`.
///
/// # Errors
///
/// Returns an error if the source is missing, the snapshot already exists, or
/// the move fails.
pub fn create_backup_at(
    source: &Path,
    backup_dir: &Path,
    timestamp: i64,
) -> FsOpsResult<BackupSnapshot> {
    let exists = source
        .try_exists()
        .map_err(|err| FsOpsError::io("backup.stat_source", source, err))?;
    if !exists {
        return Err(FsOpsError::MissingSource {
            path: source.to_path_buf(),
        });
    }

    if !backup_dir.as_os_str().is_empty() {
        fs::create_dir_all(backup_dir)
            .map_err(|err| FsOpsError::io("backup.create_dir", backup_dir, err))?;
    }

    let target = snapshot_path(backup_dir, timestamp);
    let occupied = target
        .try_exists()
        .map_err(|err| FsOpsError::io("backup.stat_snapshot", &target, err))?;
    if occupied {
        return Err(FsOpsError::SnapshotExists { path: target });
    }

    fs::rename(source, &target).map_err(|err| FsOpsError::io("backup.rename", source, err))?;
    info!(
        source = %source.display(),
        snapshot = %target.display(),
        "backup created"
    );

    Ok(BackupSnapshot {
        path: target,
        created_at: timestamp,
    })
}
