//! Mock Telegram updates
//!
//! The update family is closed: [`MockUpdate`] has exactly four variants and
//! each one is produced by a named factory (`with_message`,
//! `with_callback_query`, `with_command`, `with_inline_query`). Decorations
//! take the update by value and hand it back, so calls chain:
//!
//! ```
//! use UpdateFixtures::{MessageParams, MockUpdate, UpdateFixture};
//!
//! let update = MockUpdate::with_message(MessageParams::with_text("hi"))
//!     .with_photo(None, Some("a cat"));
//! let message = update.message().unwrap();
//! assert_eq!(message.photo.len(), 1);
//! assert_eq!(message.text_markdown_urled.as_deref(), Some("hi"));
//! ```

pub mod factory;
pub mod message;
pub mod callback;
pub mod command;
pub mod inline_query;

use std::fmt;

use serde_json::{Map, Value};

use crate::models::{MockCallbackQuery, MockMessage};
use crate::utils::errors::{FixtureError, Result};

pub use factory::UpdateFactory;
pub use message::{MessageParams, MessageUpdate};
pub use callback::CallbackUpdate;
pub use command::{CommandParams, CommandUpdate};
pub use inline_query::{InlineQueryParams, InlineQueryUpdate};

mod private {
    pub trait Sealed {}
}

/// Which kind of update a fixture stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    CallbackQuery,
    Command,
    InlineQuery,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateKind::Message => "message",
            UpdateKind::CallbackQuery => "callback_query",
            UpdateKind::Command => "command",
            UpdateKind::InlineQuery => "inline_query",
        };
        f.write_str(name)
    }
}

/// Read-only view shared by every mock update
///
/// Sealed: only the types in this module implement it.
pub trait UpdateFixture: private::Sealed {
    fn kind(&self) -> UpdateKind;

    fn message(&self) -> Option<&MockMessage> {
        None
    }

    fn callback_query(&self) -> Option<&MockCallbackQuery> {
        None
    }

    /// Chat the update is routed to, if it has one
    fn chat_id(&self) -> Option<&str> {
        self.message()
            .or_else(|| self.callback_query().and_then(|query| query.message.as_ref()))
            .map(|message| message.chat_id.as_str())
    }
}

/// A simulated inbound update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockUpdate {
    Message(MessageUpdate),
    Callback(CallbackUpdate),
    Command(CommandUpdate),
    InlineQuery(InlineQueryUpdate),
}

impl MockUpdate {
    /// Always fails: a bare update has no shape, build one through a factory
    pub fn new() -> Result<Self> {
        Err(FixtureError::UnsupportedConstruction { type_name: "MockUpdate" })
    }

    pub fn with_message(params: MessageParams) -> MessageUpdate {
        UpdateFactory::default().with_message(params)
    }

    pub fn with_callback_query(data: Option<&str>) -> CallbackUpdate {
        UpdateFactory::default().with_callback_query(data)
    }

    pub fn with_command(params: CommandParams) -> CommandUpdate {
        UpdateFactory::default().with_command(params)
    }

    pub fn with_inline_query(params: InlineQueryParams) -> InlineQueryUpdate {
        UpdateFactory::default().with_inline_query(params)
    }

    /// Render the update as a Bot API shaped JSON object
    ///
    /// The payload sits under `message`, `callback_query` or `inline_query`.
    /// Commands are plain messages on the wire.
    pub fn to_json(&self) -> Result<Value> {
        let (key, payload) = match self {
            MockUpdate::Message(update) => ("message", serde_json::to_value(&update.message)?),
            MockUpdate::Command(update) => ("message", serde_json::to_value(&update.message)?),
            MockUpdate::Callback(update) => {
                ("callback_query", serde_json::to_value(&update.callback_query)?)
            }
            MockUpdate::InlineQuery(update) => ("inline_query", serde_json::to_value(update)?),
        };

        let mut object = Map::new();
        object.insert(key.to_string(), payload);
        Ok(Value::Object(object))
    }
}

impl private::Sealed for MockUpdate {}

impl UpdateFixture for MockUpdate {
    fn kind(&self) -> UpdateKind {
        match self {
            MockUpdate::Message(update) => update.kind(),
            MockUpdate::Callback(update) => update.kind(),
            MockUpdate::Command(update) => update.kind(),
            MockUpdate::InlineQuery(update) => update.kind(),
        }
    }

    fn message(&self) -> Option<&MockMessage> {
        match self {
            MockUpdate::Message(update) => UpdateFixture::message(update),
            MockUpdate::Command(update) => UpdateFixture::message(update),
            MockUpdate::Callback(_) | MockUpdate::InlineQuery(_) => None,
        }
    }

    fn callback_query(&self) -> Option<&MockCallbackQuery> {
        match self {
            MockUpdate::Callback(update) => UpdateFixture::callback_query(update),
            _ => None,
        }
    }
}

impl From<MessageUpdate> for MockUpdate {
    fn from(update: MessageUpdate) -> Self {
        MockUpdate::Message(update)
    }
}

impl From<CallbackUpdate> for MockUpdate {
    fn from(update: CallbackUpdate) -> Self {
        MockUpdate::Callback(update)
    }
}

impl From<CommandUpdate> for MockUpdate {
    fn from(update: CommandUpdate) -> Self {
        MockUpdate::Command(update)
    }
}

impl From<InlineQueryUpdate> for MockUpdate {
    fn from(update: InlineQueryUpdate) -> Self {
        MockUpdate::InlineQuery(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_create_update() {
        let result = MockUpdate::new();
        assert!(matches!(
            result,
            Err(FixtureError::UnsupportedConstruction { type_name: "MockUpdate" })
        ));
    }

    #[test]
    fn test_kind_follows_variant() {
        let message: MockUpdate = MockUpdate::with_message(MessageParams::default()).into();
        let callback: MockUpdate = MockUpdate::with_callback_query(None).into();
        let command: MockUpdate = MockUpdate::with_command(CommandParams::default()).into();
        let inline: MockUpdate = MockUpdate::with_inline_query(InlineQueryParams::default()).into();

        assert_eq!(message.kind(), UpdateKind::Message);
        assert_eq!(callback.kind(), UpdateKind::CallbackQuery);
        assert_eq!(command.kind(), UpdateKind::Command);
        assert_eq!(inline.kind(), UpdateKind::InlineQuery);
        assert_inline_query(&inline);
    }

    fn assert_inline_query(update: &MockUpdate) {
        match update {
            MockUpdate::InlineQuery(inline) => assert_eq!(inline.offset, ""),
            other => panic!("expected an inline query, got {}", other.kind()),
        }
        assert!(update.message().is_none());
        assert!(update.callback_query().is_none());
    }

    #[test]
    fn test_chat_id_of_callback_comes_from_originating_message() {
        let bare: MockUpdate = MockUpdate::with_callback_query(Some("lang:en")).into();
        assert_eq!(bare.chat_id(), None);

        let attached: MockUpdate = MockUpdate::with_callback_query(Some("lang:en"))
            .with_originating_message(None, Some("-100"))
            .into();
        assert_eq!(attached.chat_id(), Some("-100"));
    }

    #[test]
    fn test_update_kind_display() {
        assert_eq!(UpdateKind::CallbackQuery.to_string(), "callback_query");
        assert_eq!(UpdateKind::InlineQuery.to_string(), "inline_query");
    }
}
