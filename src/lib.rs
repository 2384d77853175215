//! E-Commerce API Library
//!
//! Core library modules for the e-commerce API service: layered settings,
//! logging, and the HTTP surface built on them.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;

pub use state::AppState;

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
