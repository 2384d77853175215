//! API information DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::doc::DOCS_PATH;
use crate::config::Settings;

/// Payload of the root endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[schema(example = json!({
    "message": "Welcome to E-Commerce API",
    "version": "0.1.0",
    "docs": "/docs"
}))]
pub struct RootResponse {
    /// Greeting naming the application
    pub message: String,
    /// Application version
    pub version: String,
    /// Location of the interactive documentation
    pub docs: String,
}

impl From<&Settings> for RootResponse {
    fn from(settings: &Settings) -> Self {
        Self {
            message: format!("Welcome to {}", settings.app_name),
            version: settings.app_version.clone(),
            docs: DOCS_PATH.to_string(),
        }
    }
}
