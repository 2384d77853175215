//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod root;
