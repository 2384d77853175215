//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and settings loading.

use std::sync::Arc;

use super::handlers::{ConfigCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// A missing subcommand means `serve`.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Arc<Settings>) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
        Some(Commands::Config { check }) => {
            ConfigCommandHandler::new(settings).execute(*check)
        }
    }
}
