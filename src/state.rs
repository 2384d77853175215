//! Application state for Axum web framework.
//!
//! Carries the loaded settings into every request handler.

use std::sync::Arc;

use crate::config::Settings;

/// Application state shared by all handlers.
///
/// Cloning is cheap since settings are held behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Settings loaded once at startup
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new AppState around already loaded settings.
    ///
    /// # Example
    /// ```ignore
    /// let settings = get_settings()?;
    /// let state = AppState::new(settings);
    /// ```
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}
