//! Logging configuration and setup
//!
//! Fixtures emit `tracing` events while they are built. Tests that want to see
//! them install a subscriber through [`init_test_logging`].

use tracing::{debug, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::fixtures::UpdateKind;
use crate::utils::errors::{FixtureError, Result};

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize logging based on configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .try_init()
        .map_err(|e| FixtureError::Logging(e.to_string()))?;

    debug!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Initialize logging for a test binary
///
/// Output goes through the test harness capture. Returns `false` when another
/// test already installed the subscriber.
pub fn init_test_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init()
        .is_ok()
}

/// Log a freshly built fixture
pub fn log_fixture_built(kind: UpdateKind, id: &str) {
    debug!(kind = %kind, id = id, "Mock update built");
}

/// Log a freshly built callback query; callbacks carry no identifier of their own
pub fn log_callback_built(data: Option<&str>) {
    debug!(kind = %UpdateKind::CallbackQuery, data = data, "Mock update built");
}

/// Log a decoration applied to a fixture
pub fn log_decoration(kind: UpdateKind, decoration: &str, id: &str) {
    trace!(kind = %kind, decoration = decoration, id = id, "Mock update decorated");
}
