//! PlantGuard command-line front end.
//!
//! # Responsibility
//! - Parse flags (with `PLANTGUARD_*` env fallbacks) and start logging.
//! - Run one command against the seeded catalog and print the result.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;
use commands::{execute, Format};
use error::CliError;
use plantguard_core::{init_logging, LogLevel, LoggingConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(config) = logging_config(&cli)? {
        init_logging(&config)?;
    }

    let format = if cli.json { Format::Json } else { Format::Text };
    log::info!(
        "event=cli_command module=cli status=start version={}",
        plantguard_core::core_version()
    );
    execute(cli.command, format)
}

/// Validates `--log-level` even when file logging stays off.
fn logging_config(cli: &Cli) -> Result<Option<LoggingConfig>, CliError> {
    let level = match cli.log_level.as_deref() {
        Some(level) => level.parse::<LogLevel>()?,
        None => LogLevel::default_for_build(),
    };

    match cli.log_dir.as_deref() {
        Some(log_dir) => Ok(Some(LoggingConfig::parse(level.as_str(), log_dir)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::logging_config;
    use crate::cli::Cli;
    use crate::error::CliError;
    use clap::Parser;
    use plantguard_core::{LogLevel, LoggingError};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn bad_log_level_is_reported_without_log_dir() {
        let cli = parse(&["plantguard", "--log-level", "bogus", "summary"]);

        let err = logging_config(&cli).unwrap_err();

        assert!(matches!(
            err,
            CliError::Logging(LoggingError::UnsupportedLevel(value)) if value == "bogus"
        ));
    }

    #[test]
    fn no_log_dir_means_no_file_logging() {
        let cli = parse(&["plantguard", "--log-level", "warn", "summary"]);

        assert!(logging_config(&cli).unwrap().is_none());
    }

    #[test]
    fn log_dir_and_level_build_config() {
        let log_dir = std::env::temp_dir().join("plantguard-cli-logs");
        let log_dir = log_dir.to_string_lossy().into_owned();
        let cli = parse(&[
            "plantguard",
            "--log-level",
            "debug",
            "--log-dir",
            log_dir.as_str(),
            "summary",
        ]);

        let config = logging_config(&cli).unwrap().unwrap();

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.log_dir.to_string_lossy(), log_dir);
    }
}
