//! Configuration error types

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An external value could not be coerced to the field's declared type
    #[error("Invalid value for field `{field}`: '{value}' ({reason})")]
    InvalidValue {
        /// The field that failed coercion
        field: &'static str,
        /// The raw value as read from the environment or env file
        value: String,
        /// Why the coercion failed
        reason: String,
    },

    /// Validation error with field and message
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// The validation error message
        message: String,
    },

    /// The env file exists but could not be read
    #[error("Failed to read env file '{path}': {message}")]
    EnvFile {
        /// Path of the env file
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new coercion error for `field`
    pub fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message_names_field_and_value() {
        let err = ConfigError::invalid_value("port", "abc", "expected an integer");
        let message = err.to_string();
        assert!(message.contains("port"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_validation_helper() {
        let err = ConfigError::validation("api_prefix", "must start with '/'");
        assert!(matches!(err, ConfigError::ValidationError { ref field, .. } if field == "api_prefix"));
    }
}
