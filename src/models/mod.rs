//! Data models module
//!
//! Plain data carried by mock updates. Field names follow the Bot API so a
//! handler reads them the same way it reads the real types.

pub mod message;
pub mod callback;

// Re-export commonly used models
pub use message::{ChatType, MockChat, MockDocument, MockMessage, MockPhoto};
pub use callback::MockCallbackQuery;
