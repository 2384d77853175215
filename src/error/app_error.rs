use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type.
///
/// Covers failures surfaced over HTTP (unknown routes) and failures raised
/// by CLI commands before or while serving.
#[derive(Error, Debug)]
pub enum AppError {
    /// No route matches the requested path
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    /// Internal error for unexpected failures
    #[error("Internal error: {source}")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::validation("host", "Host address cannot be empty.").into();
        assert!(matches!(err, AppError::Configuration { .. }));
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_anyhow_converts_to_internal() {
        let err: AppError = anyhow::anyhow!("bind failed").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
