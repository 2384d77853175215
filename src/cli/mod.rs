//! CLI module for ecommerce-api
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Settings loading honoring an explicit `--env-file`
//! - Command execution for serve and config operations

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use std::sync::Arc;

use crate::config::{ConfigError, ConfigLoader, Settings, get_settings};
use crate::logger::{LoggerConfig, LoggerError, init_logger};

/// Load settings for this invocation
///
/// Without `--env-file` this goes through the process-wide cache, reading
/// `.env` from the working directory. An explicit file bypasses the cache.
///
/// # Errors
/// Returns the load error when a value cannot be coerced or the env file
/// cannot be read.
pub fn load_settings(cli: &Cli) -> Result<Arc<Settings>, ConfigError> {
    match &cli.env_file {
        Some(path) => ConfigLoader::new().with_env_file(path).load().map(Arc::new),
        None => get_settings(),
    }
}

/// Build the logger configuration from settings and CLI overrides
///
/// `--verbose` and `--quiet` take precedence over the `DEBUG` setting.
pub fn logger_config(cli: &Cli, settings: &Settings) -> LoggerConfig {
    let mut config = LoggerConfig::from_settings(settings);

    if cli.verbose {
        config = config.with_level("debug");
    } else if cli.quiet {
        config = config.with_level("error");
    }

    if let Some(format) = cli.log_format {
        config = config.with_format(format);
    }

    config
}

/// Initialize the global logger for this invocation
///
/// # Errors
/// Returns error if a subscriber is already installed.
pub fn init_logger_from_cli(cli: &Cli, settings: &Settings) -> Result<(), LoggerError> {
    init_logger(logger_config(cli, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogFormat;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_logger_level_follows_debug_setting() {
        let cli = Cli::try_parse_from(["ecommerce-api"]).unwrap();
        let settings = Settings {
            debug: true,
            ..Settings::default()
        };
        assert_eq!(logger_config(&cli, &settings).level, "debug");
        assert_eq!(logger_config(&cli, &Settings::default()).level, "info");
    }

    #[test]
    fn test_quiet_overrides_debug_setting() {
        let cli = Cli::try_parse_from(["ecommerce-api", "--quiet"]).unwrap();
        let settings = Settings {
            debug: true,
            ..Settings::default()
        };
        assert_eq!(logger_config(&cli, &settings).level, "error");
    }

    #[test]
    fn test_log_format_override() {
        let cli = Cli::try_parse_from(["ecommerce-api", "--log-format", "json"]).unwrap();
        assert_eq!(
            logger_config(&cli, &Settings::default()).format,
            LogFormat::Json
        );
    }

    #[test]
    fn test_explicit_env_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "APP_NAME=Shop From File").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["ecommerce-api", "--env-file", &path, "config"]).unwrap();
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.app_name, "Shop From File");
    }
}
