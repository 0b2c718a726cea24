//! Telemetry initialisation primitives and logging configuration.
//!
//! # Design
//! - Centralises logging setup (plain text or JSON) with a single entry point.
//! - The diagnostic file sink and the optional console sink share one filter.
//! - `RUST_LOG` wins over the configured level.

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};
use crate::rotate::{RotatingFileWriter, RotationPolicy};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level string (e.g., `info`, `debug`).
    pub level: &'a str,
    /// Output format selection for every sink.
    pub format: LogFormat,
    /// Rotating diagnostic file, when enabled.
    pub file: Option<RotationPolicy>,
    /// Mirror log lines to stderr.
    pub console: bool,
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable log lines.
    Pretty,
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or the subscriber cannot
/// be installed (for example, because another subscriber is already set).
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

/// Assemble the subscriber without installing it.
///
/// # Errors
///
/// Returns an error if the diagnostic log file cannot be opened.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Dispatch> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if let Some(policy) = &config.file {
        let writer = RotatingFileWriter::open(policy.clone()).map_err(|source| {
            TelemetryError::LogFileOpen {
                path: policy.path.clone(),
                source,
            }
        })?;
        layers.push(fmt_layer(config.format, writer, false));
    }

    if config.console {
        layers.push(fmt_layer(config.format, std::io::stderr, true));
    }

    let subscriber = tracing_subscriber::registry()
        .with(layers)
        .with(build_env_filter(config.level));
    Ok(Dispatch::new(subscriber))
}

fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(false)
            .with_thread_ids(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false)
            .with_thread_ids(false)
            .boxed(),
    }
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
