//! Configuration validation logic
//!
//! Loading only guarantees that every field has the right type. The checks
//! here catch values that are well-typed but unusable, and run before the
//! server starts (`serve`, `serve --dry-run`, `config --check`).

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

impl Settings {
    /// Validate semantic constraints on loaded settings
    ///
    /// # Validation Rules
    /// - Application name must not be blank
    /// - API prefix must start with `/` and must not end with `/`
    /// - Host must not be blank
    /// - Access token lifetime must be positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::validation(
                "app_name",
                "Application name cannot be empty.",
            ));
        }

        if !self.api_prefix.starts_with('/') {
            return Err(ConfigError::ValidationError {
                field: "api_prefix".to_string(),
                message: format!(
                    "API prefix must start with '/', got '{}'.",
                    self.api_prefix
                ),
            });
        }

        if self.api_prefix.len() > 1 && self.api_prefix.ends_with('/') {
            return Err(ConfigError::ValidationError {
                field: "api_prefix".to_string(),
                message: format!(
                    "API prefix must not end with '/', got '{}'.",
                    self.api_prefix
                ),
            });
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "host",
                "Host address cannot be empty.",
            ));
        }

        if self.access_token_expire_minutes <= 0 {
            return Err(ConfigError::ValidationError {
                field: "access_token_expire_minutes".to_string(),
                message: format!(
                    "Access token lifetime must be positive, got {}.",
                    self.access_token_expire_minutes
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_blank_app_name_rejected() {
        let settings = Settings {
            app_name: "   ".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("app_name"));
    }

    #[test]
    fn test_api_prefix_without_leading_slash_rejected() {
        let settings = Settings {
            api_prefix: "api/v1".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("api_prefix"));
    }

    #[test]
    fn test_api_prefix_with_trailing_slash_rejected() {
        let settings = Settings {
            api_prefix: "/api/v1/".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_root_api_prefix_allowed() {
        let settings = Settings {
            api_prefix: "/".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_host_rejected() {
        let settings = Settings {
            host: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_positive_token_lifetime_rejected() {
        for minutes in [0, -5] {
            let settings = Settings {
                access_token_expire_minutes: minutes,
                ..Settings::default()
            };
            let err = settings.validate().unwrap_err();
            assert!(err.to_string().contains("access_token_expire_minutes"));
        }
    }
}
