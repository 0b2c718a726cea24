//! Runs in its own process because it installs the global tracing subscriber.

use asset_purge_telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};

#[test]
fn init_logging_installs_subscriber_once() {
    let config = LoggingConfig {
        level: "info",
        format: LogFormat::Pretty,
        file: None,
        console: false,
    };
    assert!(init_logging(&config).is_ok());
    assert!(matches!(
        init_logging(&config),
        Err(TelemetryError::SubscriberInstall { .. })
    ));
}
