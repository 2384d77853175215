//! Config command handler
//!
//! Prints the effective settings as `NAME=value` lines, one per field.

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::Settings;
use crate::error::AppResult;

/// Handler for the config command
pub struct ConfigCommandHandler {
    settings: Arc<Settings>,
}

impl ConfigCommandHandler {
    /// Create a new config command handler
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Print settings to stdout, validating them first when `check` is set
    pub fn execute(&self, check: bool) -> AppResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, check)
    }

    /// Write settings to `out`
    ///
    /// Secrets are redacted. With `check`, invalid settings fail before
    /// anything is written.
    pub fn write_to<W: Write>(&self, out: &mut W, check: bool) -> AppResult<()> {
        if check {
            self.settings.validate()?;
        }

        for (name, value) in self.settings.display_pairs() {
            writeln!(out, "{}={}", name, value).map_err(anyhow::Error::from)?;
        }

        if check {
            writeln!(out, "# Configuration is valid").map_err(anyhow::Error::from)?;
        }

        Ok(())
    }
}
