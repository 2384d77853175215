//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::AppResult;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    settings: Arc<Settings>,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, validates configuration and exits without starting server
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        self.settings.validate().inspect_err(|e| {
            tracing::error!(error = %e, "Configuration validation failed");
        })?;

        if dry_run {
            self.report();
            return Ok(());
        }

        Server::new(Arc::clone(&self.settings)).run().await?;
        Ok(())
    }

    fn report(&self) {
        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.settings.address());
        println!("✓ API prefix: {}", self.settings.api_prefix);
        println!("Dry run completed successfully - configuration is ready for deployment");
    }
}
