//! Sequential orchestrator that drives each record through validation,
//! lookup, deletion and auditing.
//!
//! # Design
//! - One record is processed to completion before the next one starts.
//! - Per-record failures are folded into the run totals and never abort the run.
//! - Skips are reported through diagnostics only.

use tracing::{error, info, warn};

use crate::audit::AuditTrail;
use crate::directory::AssetDirectory;
use crate::model::AssetRecord;
use crate::outcome::{RecordOutcome, RunOutcome};
use crate::validate::is_valid_identifier;

/// Drives records against a directory and an audit trail.
pub struct Pipeline<'a, D: ?Sized, A> {
    directory: &'a D,
    audit: A,
}

impl<'a, D, A> Pipeline<'a, D, A>
where
    D: AssetDirectory + ?Sized,
    A: AuditTrail,
{
    /// Build a pipeline over the given directory and audit trail.
    #[must_use]
    pub const fn new(directory: &'a D, audit: A) -> Self {
        Self { directory, audit }
    }

    /// Process every record in order and return the accumulated totals.
    pub async fn run<I>(&mut self, records: I) -> RunOutcome
    where
        I: IntoIterator<Item = AssetRecord>,
    {
        let mut totals = RunOutcome::default();
        for record in records {
            let outcome = self.process(&record).await;
            totals.record(record.as_str(), &outcome);
        }
        totals
    }

    /// Classify a single record, performing the remote delete when it resolves.
    pub async fn process(&mut self, record: &AssetRecord) -> RecordOutcome {
        let identifier = record.as_str();
        info!(identifier, "processing computer");

        if !is_valid_identifier(identifier) {
            warn!(identifier, "invalid computer name skipped");
            return RecordOutcome::SkippedInvalidName;
        }

        let asset = match self.directory.find_by_name(identifier).await {
            Ok(Some(asset)) => asset,
            Ok(None) => {
                warn!(identifier, "computer not found");
                return RecordOutcome::SkippedNotFound;
            }
            Err(err) => {
                let reason = err.reason();
                error!(identifier, reason = %reason, "asset lookup failed");
                return RecordOutcome::Failed { reason };
            }
        };

        info!(identifier, asset_id = %asset.id, "computer found");

        match self.directory.delete_by_id(&asset.id).await {
            Ok(()) => {
                info!(identifier, asset_id = %asset.id, "asset deleted");
                if let Err(err) = self.audit.record_deletion(identifier) {
                    error!(identifier, error = %err, "failed to append to audit log");
                }
                RecordOutcome::Succeeded { asset_id: asset.id }
            }
            Err(err) => {
                let reason = err.reason();
                error!(
                    identifier,
                    asset_id = %asset.id,
                    reason = %reason,
                    "asset deletion failed"
                );
                RecordOutcome::Failed { reason }
            }
        }
    }

    /// Release the audit trail.
    #[must_use]
    pub fn into_audit(self) -> A {
        self.audit
    }
}
