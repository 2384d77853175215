//! Data Transfer Objects for API responses.
//!
//! DTOs are organized by domain:
//! - `root` - API information payload
//! - `health` - Health check payload
//! - `error` - Common error response DTOs

mod error;
mod health;
mod root;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use root::RootResponse;
