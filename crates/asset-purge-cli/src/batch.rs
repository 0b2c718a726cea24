//! One purge run: back up the input list, read the snapshot, process it.
//!
//! # Design
//! - The backup happens before any remote call; if it fails nothing else runs.
//! - Records always come from the snapshot, never from the live input path.

use asset_purge_config::PathSettings;
use asset_purge_core::{AssetDirectory, Pipeline, RunOutcome};
use asset_purge_fsops::{AuditLog, FsOpsError, create_backup};
use thiserror::Error;
use tracing::info;

/// Setup failures that abort a run before any record is processed.
#[derive(Debug, Error)]
pub(crate) enum BatchError {
    #[error("failed to back up the input list")]
    Backup {
        #[source]
        source: FsOpsError,
    },
    #[error("failed to read the input snapshot")]
    Snapshot {
        #[source]
        source: FsOpsError,
    },
}

impl BatchError {
    pub(crate) fn detail(&self) -> String {
        match self {
            Self::Backup { source } | Self::Snapshot { source } => {
                format!("{self}: {}", source.detail())
            }
        }
    }
}

/// Run the batch against `directory`, appending successes to the audit log.
pub(crate) async fn run_batch<D>(
    paths: &PathSettings,
    directory: &D,
) -> Result<RunOutcome, BatchError>
where
    D: AssetDirectory + ?Sized,
{
    let snapshot = create_backup(&paths.asset_file, &paths.backup_dir)
        .map_err(|source| BatchError::Backup { source })?;
    let records = snapshot
        .read_records()
        .map_err(|source| BatchError::Snapshot { source })?;
    info!(
        snapshot = %snapshot.path().display(),
        records = records.len(),
        "snapshot loaded"
    );

    let mut pipeline = Pipeline::new(directory, AuditLog::new(paths.processed_file.clone()));
    Ok(pipeline.run(records).await)
}
