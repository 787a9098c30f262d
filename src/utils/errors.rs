//! Error handling for UpdateFixtures
//!
//! Building a fixture never fails. The only fixture-level error is the guard
//! against constructing the update base type directly; the remaining variants
//! come from settings loading, logging setup and JSON rendering.

use thiserror::Error;

/// Main error type for UpdateFixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("{type_name} cannot be constructed directly, use one of its factories")]
    UnsupportedConstruction { type_name: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for UpdateFixtures operations
pub type Result<T> = std::result::Result<T, FixtureError>;
