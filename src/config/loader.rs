//! Configuration loader for ecommerce-api
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Map, Source, Value};

use crate::config::error::ConfigError;
use crate::config::settings::{
    DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES, DEFAULT_API_PREFIX, DEFAULT_APP_NAME,
    DEFAULT_APP_VERSION, DEFAULT_DATABASE_URL, DEFAULT_DEBUG, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_SECRET_KEY, Field, Settings,
};

/// Default env file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Origin label attached to values read from the process environment
const ENV_ORIGIN: &str = "environment";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults (lowest priority)
/// 2. The env file (`.env` unless overridden), if it exists
/// 3. Process environment variables (highest priority)
///
/// Keys are matched to fields case-insensitively; keys that match no field
/// are ignored.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Env file to read, `None` to skip the file layer entirely
    env_file: Option<PathBuf>,
    /// Environment snapshot used instead of the process environment
    env_vars: Option<Vec<(String, String)>>,
}

impl ConfigLoader {
    /// Create a loader reading `.env` and the process environment
    pub fn new() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            env_vars: None,
        }
    }

    /// Read the env file layer from `path` instead of `.env`
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip the env file layer
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Resolve environment variables from `vars` instead of the process
    /// environment
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Load settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The env file exists but cannot be read
    /// - A value cannot be coerced to its field's type
    /// - A process environment value for a known field is not valid UTF-8
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings = Settings::from_config(&config)?;

        tracing::debug!(
            env_file = ?self.env_file,
            app_name = %settings.app_name,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Self::add_defaults(Config::builder())?;

        let builder = match self.env_file {
            Some(ref path) => builder.add_source(KeyValueSource::from_env_file(path)?),
            None => builder,
        };

        // Environment variables are always the highest priority source
        let builder = builder.add_source(self.env_source()?);

        builder.build().map_err(ConfigError::from)
    }

    /// Register the built-in default of every field
    fn add_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(builder
            .set_default(Field::AppName.key(), DEFAULT_APP_NAME)?
            .set_default(Field::AppVersion.key(), DEFAULT_APP_VERSION)?
            .set_default(Field::Debug.key(), DEFAULT_DEBUG)?
            .set_default(Field::ApiPrefix.key(), DEFAULT_API_PREFIX)?
            .set_default(Field::Host.key(), DEFAULT_HOST)?
            .set_default(Field::Port.key(), i64::from(DEFAULT_PORT))?
            .set_default(Field::DatabaseUrl.key(), DEFAULT_DATABASE_URL)?
            .set_default(Field::SecretKey.key(), DEFAULT_SECRET_KEY)?
            .set_default(
                Field::AccessTokenExpireMinutes.key(),
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            )?)
    }

    fn env_source(&self) -> Result<KeyValueSource, ConfigError> {
        let vars = match self.env_vars {
            Some(ref vars) => vars.clone(),
            None => unicode_vars(std::env::vars_os())?,
        };
        Ok(KeyValueSource::from_environment(vars))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Narrow an OS environment snapshot to unicode pairs
///
/// Names that are not valid unicode cannot match any field and are dropped,
/// as are non-unicode values of unrelated variables. A non-unicode value of
/// a known field is a load failure.
fn unicode_vars<I>(vars: I) -> Result<Vec<(String, String)>, ConfigError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut pairs = Vec::new();
    for (key, value) in vars {
        let Ok(key) = key.into_string() else {
            continue;
        };
        match value.into_string() {
            Ok(value) => pairs.push((key, value)),
            Err(value) => {
                if let Some(field) = Field::lookup(&key) {
                    return Err(ConfigError::invalid_value(
                        field.key(),
                        value.to_string_lossy(),
                        "value is not valid UTF-8",
                    ));
                }
            }
        }
    }
    Ok(pairs)
}

/// A layer of `KEY=VALUE` pairs already narrowed to known fields
#[derive(Debug, Clone)]
struct KeyValueSource {
    origin: String,
    entries: Vec<(Field, String)>,
}

impl KeyValueSource {
    /// Narrow raw pairs to known fields.
    ///
    /// When several casings of the same key are present, the canonical
    /// upper-case name wins; otherwise the last pair seen wins.
    fn resolve<I>(origin: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut resolved: HashMap<Field, (bool, String)> = HashMap::new();

        for (name, value) in pairs {
            let Some(field) = Field::lookup(&name) else {
                continue;
            };
            let canonical = name == field.env_name();
            match resolved.get(&field) {
                Some((true, _)) if !canonical => {}
                _ => {
                    resolved.insert(field, (canonical, value));
                }
            }
        }

        let entries = Field::ALL
            .into_iter()
            .filter_map(|field| resolved.remove(&field).map(|(_, value)| (field, value)))
            .collect();

        Self {
            origin: origin.into(),
            entries,
        }
    }

    /// Environment layer; pairs are sorted so the result does not depend on
    /// the order the platform lists variables in
    fn from_environment(mut vars: Vec<(String, String)>) -> Self {
        vars.sort();
        Self::resolve(ENV_ORIGIN, vars)
    }

    /// Env file layer; a missing file yields an empty layer
    fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if is_not_found(&e) => {
                tracing::debug!(path = %origin, "No env file found, skipping");
                return Ok(Self {
                    origin,
                    entries: Vec::new(),
                });
            }
            Err(e) => {
                return Err(ConfigError::EnvFile {
                    path: origin,
                    message: e.to_string(),
                });
            }
        };

        let mut pairs = Vec::new();
        // `entry` counts parsed entries from 1; a quoted value spanning several
        // lines is one entry. `column` is the offset of the error in it.
        for (entry, item) in (1usize..).zip(iter) {
            match item {
                Ok(pair) => pairs.push(pair),
                // Line contents may hold secrets, only the position is logged
                Err(dotenvy::Error::LineParse(_, column)) => {
                    tracing::warn!(
                        path = %origin,
                        entry,
                        column,
                        "Skipping malformed env file entry"
                    );
                }
                Err(e) => {
                    return Err(ConfigError::EnvFile {
                        path: origin,
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(Self::resolve(origin, pairs))
    }
}

impl Source for KeyValueSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        Ok(self
            .entries
            .iter()
            .map(|(field, value)| {
                (
                    field.key().to_string(),
                    Value::new(Some(&self.origin), value.as_str()),
                )
            })
            .collect())
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
