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

//! Layered configuration for a purge run.
//!
//! Layout: `defaults.rs` (fixed paths and limits), `model.rs` (typed sections),
//! `loader.rs` (defaults → TOML file → environment), `validate.rs` (checks run
//! after extraction), `error.rs` (error types).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{DEFAULT_CONFIG_PATH, ENV_PREFIX, layered, load};
pub use model::{ApiSettings, LogFormatSetting, LoggingSettings, PathSettings, PurgeConfig};
