//! Fixture settings management
//!
//! Settings are read from an optional `fixtures` file in the working
//! directory and from `UPDATE_FIXTURES_*` environment variables. Nested keys
//! use a double underscore, e.g. `UPDATE_FIXTURES_LOGGING__LEVEL=debug`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::ChatType;

/// Environment variable prefix for fixture settings
pub const ENV_PREFIX: &str = "UPDATE_FIXTURES";

/// Main fixture configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureSettings {
    /// Chat type given to messages that don't name one
    pub default_chat_type: ChatType,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl FixtureSettings {
    /// Load settings from the optional `fixtures` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("fixtures").required(false))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a specific file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            default_chat_type: ChatType::Private,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
