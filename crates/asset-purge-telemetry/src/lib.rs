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

//! Telemetry primitives for purge runs.
//!
//! Layout: `init.rs` (subscriber assembly), `rotate.rs` (size-rotating log
//! file), `context.rs` (run span), `error.rs` (error types).

pub mod context;
pub mod error;
pub mod init;
pub mod rotate;

pub use context::RunContext;
pub use error::{Result, TelemetryError};
pub use init::{LogFormat, LoggingConfig, build_dispatch, init_logging};
pub use rotate::{RotatingFileWriter, RotationPolicy, rotated_path};
