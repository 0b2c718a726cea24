//! Argument parsing, configuration and logging setup, and exit codes.

use std::path::PathBuf;

use anyhow::anyhow;
use asset_purge_config::{
    DEFAULT_CONFIG_PATH, LogFormatSetting, LoggingSettings, PurgeConfig, load,
};
use asset_purge_telemetry::{LogFormat, LoggingConfig, RotationPolicy, RunContext, init_logging};
use clap::Parser;
use tracing::{Instrument, error, info};

use crate::batch::run_batch;
use crate::client::{CliError, CliResult, DirectoryClient};
use crate::output::report_summary;

#[derive(Debug, Parser)]
#[command(
    name = "asset-purge",
    about = "Delete the assets listed in the input file from the asset directory",
    version
)]
pub(crate) struct Cli {
    /// Configuration file layered under `ASSET_PURGE__*` environment overrides.
    #[arg(long, env = "ASSET_PURGE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub(crate) config: PathBuf,
}

/// Parses arguments, runs one purge, and returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    match execute(&cli).await {
        Ok(()) => 0,
        Err(err) => {
            let message = err.display_message();
            error!(error = %message, exit_code = err.exit_code(), "run aborted");
            eprintln!("error: {message}");
            err.exit_code()
        }
    }
}

async fn execute(cli: &Cli) -> CliResult<()> {
    let config = load(&cli.config).map_err(|err| CliError::validation(err.detail()))?;
    init_logging(&logging_config(&config.logging)).map_err(CliError::failure)?;

    let context = RunContext::new();
    purge(cli, &config, &context)
        .instrument(context.span())
        .await
}

async fn purge(cli: &Cli, config: &PurgeConfig, context: &RunContext) -> CliResult<()> {
    info!(config = %cli.config.display(), "purge run started");
    let client = DirectoryClient::new(&config.api, &context.run_id().to_string())?;
    let outcome = run_batch(&config.paths, &client)
        .await
        .map_err(|err| CliError::failure(anyhow!(err.detail())))?;
    report_summary(&outcome);
    Ok(())
}

fn logging_config(settings: &LoggingSettings) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &settings.level,
        format: match settings.format {
            LogFormatSetting::Pretty => LogFormat::Pretty,
            LogFormatSetting::Json => LogFormat::Json,
        },
        file: Some(RotationPolicy {
            path: settings.file.clone(),
            max_bytes: settings.max_bytes,
            max_files: settings.max_files,
        }),
        console: settings.console,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_path_can_be_overridden() {
        let cli = Cli::try_parse_from(["asset-purge", "--config", "/etc/purge.toml"])
            .expect("parses");
        assert_eq!(cli.config, PathBuf::from("/etc/purge.toml"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["asset-purge", "extra"]).is_err());
    }

    #[test]
    fn logging_settings_map_to_rotating_file_sink() {
        let settings = LoggingSettings {
            format: LogFormatSetting::Json,
            console: true,
            ..LoggingSettings::default()
        };
        let config = logging_config(&settings);

        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.console);
        assert_eq!(
            config.file,
            Some(RotationPolicy {
                path: PathBuf::from("asset_removal.log"),
                max_bytes: 5 * 1024 * 1024,
                max_files: 5,
            })
        );
    }

    #[tokio::test]
    async fn invalid_configuration_exits_with_validation_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("asset-purge.toml");
        std::fs::write(&path, "[api]\nurl = \"not a url\"\nusername = \"svc\"\n")
            .expect("config");

        let err = execute(&Cli { config: path }).await.expect_err("invalid");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("api.url"));
    }
}
