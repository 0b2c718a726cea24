//! In-memory stand-ins for the remote directory and the audit trail.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use asset_purge_core::directory::select_exact_match;
use asset_purge_core::{Asset, AssetDirectory, AssetId, AuditTrail, DirectoryError, DirectoryResult};
use async_trait::async_trait;

/// Directory backed by a fixed candidate list.
///
/// Lookups behave like a substring search followed by the exact-match scan,
/// and every call is recorded for later assertions.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    candidates: Vec<Asset>,
    lookup_failures: HashSet<String>,
    delete_failures: HashMap<String, u16>,
    lookups: Mutex<Vec<String>>,
    deletions: Mutex<Vec<AssetId>>,
}

impl StaticDirectory {
    /// Empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset the directory knows about.
    #[must_use]
    pub fn with_asset(mut self, host_name: &str, id: &str) -> Self {
        self.candidates.push(Asset {
            id: AssetId::new(id),
            host_name: host_name.to_string(),
        });
        self
    }

    /// Make lookups for `name` fail at the transport level.
    #[must_use]
    pub fn failing_lookup(mut self, name: &str) -> Self {
        self.lookup_failures.insert(name.to_string());
        self
    }

    /// Make deletes for `id` answer with `status`.
    #[must_use]
    pub fn failing_delete(mut self, id: &str, status: u16) -> Self {
        self.delete_failures.insert(id.to_string(), status);
        self
    }

    /// Names passed to `find_by_name`, in call order.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Identifiers successfully deleted, in call order.
    #[must_use]
    pub fn deletions(&self) -> Vec<AssetId> {
        self.deletions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AssetDirectory for StaticDirectory {
    async fn find_by_name(&self, name: &str) -> DirectoryResult<Option<Asset>> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(name.to_string());
        }
        if self.lookup_failures.contains(name) {
            return Err(DirectoryError::Transport {
                operation: "assets.find",
                detail: "connection reset by peer".to_string(),
            });
        }
        let partial_hits = self
            .candidates
            .iter()
            .filter(|asset| asset.host_name.contains(name))
            .cloned();
        Ok(select_exact_match(name, partial_hits))
    }

    async fn delete_by_id(&self, id: &AssetId) -> DirectoryResult<()> {
        if let Some(status) = self.delete_failures.get(id.as_str()) {
            return Err(DirectoryError::UnexpectedStatus {
                operation: "assets.delete",
                status: *status,
                body: "rejected".to_string(),
            });
        }
        if let Ok(mut deletions) = self.deletions.lock() {
            deletions.push(id.clone());
        }
        Ok(())
    }
}

/// Audit trail that keeps entries in memory and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingAudit {
    /// Identifiers recorded so far.
    pub entries: Vec<String>,
    /// When set, every append fails.
    pub fail_writes: bool,
}

impl AuditTrail for RecordingAudit {
    fn record_deletion(&mut self, identifier: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "audit log is read-only",
            ));
        }
        self.entries.push(identifier.to_string());
        Ok(())
    }
}
