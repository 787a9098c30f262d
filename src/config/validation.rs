//! Configuration validation module

use crate::utils::errors::{FixtureError, Result};
use super::FixtureSettings;

/// Validate all configuration settings
pub fn validate_settings(settings: &FixtureSettings) -> Result<()> {
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FixtureError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(FixtureError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
