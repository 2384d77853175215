//! Configuration management module for ecommerce-api
//!
//! This module provides layered configuration loading with support for:
//! - Built-in defaults for every field
//! - An optional `.env` file
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `.env` file keys
//! 3. Process environment variables
//!
//! Keys match field names case-insensitively (`PORT`, `port`, `Port`).

pub mod cache;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use cache::{SettingsCache, get_settings};
pub use error::ConfigError;
pub use loader::{ConfigLoader, DEFAULT_ENV_FILE};
pub use settings::{Field, Settings};
