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
#![allow(clippy::redundant_pub_crate)]

//! Batch asset purge against a vulnerability-management asset directory.
//!
//! Layout:
//! - `cli.rs`: argument parsing, configuration, logging and exit codes
//! - `client.rs`: HTTP directory client, credentials, and CLI errors
//! - `batch.rs`: backup, snapshot read, and pipeline execution
//! - `output.rs`: end-of-run summary rendering
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod batch;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod output;

pub use cli::run;
