//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logger::LogFormat;

/// A REST API for an e-commerce platform
#[derive(Parser, Debug)]
#[command(name = "ecommerce-api")]
#[command(about = "A REST API for an e-commerce platform")]
#[command(long_about = "
ecommerce-api serves the e-commerce REST API. Settings come from built-in
defaults, an optional .env file and environment variables, in increasing
order of priority. Variable names match settings case-insensitively.

EXAMPLES:
    # Start the server with default configuration
    ecommerce-api

    # Start on another port
    PORT=9090 ecommerce-api serve

    # Use a specific env file
    ecommerce-api --env-file /etc/ecommerce/production.env serve

    # Check configuration without starting the server
    ecommerce-api serve --dry-run

    # Show effective settings with secrets redacted
    ecommerce-api config
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Env file path
    ///
    /// Read settings from this file instead of `.env` in the working
    /// directory. The file must exist and be readable.
    ///
    /// Example: --env-file /etc/ecommerce/production.env
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_env_file_path)]
    pub env_file: Option<PathBuf>,

    /// Log output format
    ///
    /// Available formats: full, compact, json
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level regardless of the DEBUG setting.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server bound to HOST:PORT.
    ///
    /// Examples:
    ///   ecommerce-api serve             # Start with loaded settings
    ///   ecommerce-api serve --dry-run   # Validate settings without starting
    Serve {
        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print effective settings
    ///
    /// Prints every setting as NAME=value with the secret key and database
    /// password redacted.
    Config {
        /// Also validate settings and fail if they are unusable
        #[arg(long)]
        check: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["ecommerce-api"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.env_file.is_none());
        assert!(cli.log_format.is_none());
    }

    #[test]
    fn test_serve_dry_run() {
        let cli = Cli::try_parse_from(["ecommerce-api", "serve", "--dry-run"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve { dry_run: true }));
    }

    #[test]
    fn test_config_check() {
        let cli = Cli::try_parse_from(["ecommerce-api", "config", "--check"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config { check: true }));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["ecommerce-api", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        assert!(Cli::try_parse_from(["ecommerce-api", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_missing_env_file_rejected() {
        let result = Cli::try_parse_from([
            "ecommerce-api",
            "--env-file",
            "/nonexistent/path/to/.env",
        ]);
        assert!(result.is_err());
    }
}
