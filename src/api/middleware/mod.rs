//! Middleware components for request processing.
//!
//! Request IDs are assigned and echoed by tower-http's request-id layers
//! (see `api::routes`); this module logs requests under that ID and renders
//! errors as JSON.

mod error_handler;
mod logging;

pub use logging::logging_middleware;

/// Header carrying the request ID, both inbound and on responses
pub const REQUEST_ID_HEADER: &str = "x-request-id";
