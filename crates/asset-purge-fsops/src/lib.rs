//! Filesystem side of a purge run: input snapshot and audit log.
#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

pub mod audit;
pub mod backup;
pub mod error;
pub mod records;

pub use audit::{AUDIT_TIMESTAMP_FORMAT, AuditLog};
pub use backup::{BackupSnapshot, create_backup, create_backup_at, snapshot_path};
pub use error::{FsOpsError, FsOpsResult};
pub use records::{parse_records, read_records};
