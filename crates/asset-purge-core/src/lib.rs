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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Core domain for the asset purge pipeline.
//!
//! Layout: `model.rs` (records and remote assets), `validate.rs` (identifier
//! checks), `directory.rs` (remote directory seam and its errors), `audit.rs`
//! (audit trail seam), `outcome.rs` (per-record and per-run results),
//! `pipeline.rs` (sequential orchestrator).

pub mod audit;
pub mod directory;
pub mod model;
pub mod outcome;
pub mod pipeline;
pub mod validate;

pub use audit::AuditTrail;
pub use directory::{AssetDirectory, DirectoryError, DirectoryResult};
pub use model::{Asset, AssetId, AssetRecord};
pub use outcome::{RecordOutcome, RunOutcome};
pub use pipeline::Pipeline;
pub use validate::is_valid_identifier;
