//! Per-record classifications and the aggregate result of a run.

use crate::model::AssetId;

/// Terminal classification of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The identifier failed validation and was never sent to the directory.
    SkippedInvalidName,
    /// The directory had no asset with exactly this host name.
    SkippedNotFound,
    /// The asset was deleted.
    Succeeded {
        /// Identifier of the deleted asset.
        asset_id: AssetId,
    },
    /// The lookup or the delete failed.
    Failed {
        /// Captured failure reason.
        reason: String,
    },
}

impl RecordOutcome {
    /// Whether the record was excluded from success and failure counting.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::SkippedInvalidName | Self::SkippedNotFound)
    }
}

/// Aggregate counters accumulated across a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of assets deleted.
    pub success_count: usize,
    /// Number of records whose lookup or delete failed.
    pub failure_count: usize,
    /// Failed identifiers in processing order.
    pub failed_identifiers: Vec<String>,
}

impl RunOutcome {
    /// Fold one record's classification into the totals. Skips leave the
    /// totals untouched.
    pub fn record(&mut self, identifier: &str, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Succeeded { .. } => {
                self.success_count = self.success_count.saturating_add(1);
            }
            RecordOutcome::Failed { .. } => {
                self.failure_count = self.failure_count.saturating_add(1);
                self.failed_identifiers.push(identifier.to_string());
            }
            RecordOutcome::SkippedInvalidName | RecordOutcome::SkippedNotFound => {}
        }
    }
}
