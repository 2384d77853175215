//! Memoized settings access.
//!
//! [`SettingsCache`] runs its loader at most once successfully and hands out
//! the same `Arc<Settings>` afterwards. Concurrent first callers block on a
//! single loader run and all observe its result.
//!
//! A failed load is not remembered: the error goes to the caller and the next
//! call runs the loader again.

use std::fmt;
use std::sync::{Arc, LazyLock};

use once_cell::sync::OnceCell;

use crate::config::error::ConfigError;
use crate::config::loader::ConfigLoader;
use crate::config::settings::Settings;

type LoadFn = dyn Fn() -> Result<Settings, ConfigError> + Send + Sync;

/// Process-wide cache backing [`get_settings`].
static GLOBAL: LazyLock<SettingsCache> =
    LazyLock::new(|| SettingsCache::new(ConfigLoader::new()));

/// Get the process-wide settings.
///
/// The first successful call loads settings from the environment and the
/// `.env` file in the working directory; every later call returns the same
/// instance.
///
/// # Errors
///
/// Returns the load error if no call has succeeded yet and loading fails.
pub fn get_settings() -> Result<Arc<Settings>, ConfigError> {
    GLOBAL.get()
}

/// Single-flight, load-once holder for [`Settings`]
pub struct SettingsCache {
    cell: OnceCell<Arc<Settings>>,
    loader: Box<LoadFn>,
}

impl SettingsCache {
    /// Create a cache that loads through `loader` on first access
    pub fn new(loader: ConfigLoader) -> Self {
        Self::with_loader(move || loader.load())
    }

    /// Create a cache around an arbitrary load function
    pub fn with_loader<F>(load: F) -> Self
    where
        F: Fn() -> Result<Settings, ConfigError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            loader: Box::new(load),
        }
    }

    /// Get the cached settings, loading them on first access
    pub fn get(&self) -> Result<Arc<Settings>, ConfigError> {
        self.cell
            .get_or_try_init(|| {
                let settings = (self.loader)().inspect_err(|e| {
                    tracing::error!(error = %e, "Failed to load settings");
                })?;
                Ok(Arc::new(settings))
            })
            .cloned()
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for SettingsCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsCache")
            .field("settings", &self.cell.get())
            .finish_non_exhaustive()
    }
}
