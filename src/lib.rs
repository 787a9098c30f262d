//! UpdateFixtures
//!
//! Mock Telegram updates for exercising a bot's update handlers without the
//! Bot API. Fixtures come in four shapes (message, callback query, command,
//! inline query) and fill every identifier the caller leaves out with a fresh
//! random key.

#![allow(non_snake_case)]

pub mod config;
pub mod fixtures;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::FixtureSettings;
pub use fixtures::{
    CallbackUpdate, CommandParams, CommandUpdate, InlineQueryParams, InlineQueryUpdate,
    MessageParams, MessageUpdate, MockUpdate, UpdateFactory, UpdateFixture, UpdateKind,
};
pub use models::{ChatType, MockCallbackQuery, MockChat, MockDocument, MockMessage, MockPhoto};
pub use utils::errors::{FixtureError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
