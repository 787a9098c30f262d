//! Configuration management module
//!
//! Fixture defaults can be tuned from a TOML file or environment variables.

pub mod settings;
pub mod validation;

pub use settings::{FixtureSettings, LoggingConfig};
