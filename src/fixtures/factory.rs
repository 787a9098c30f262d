//! Update factory
//!
//! `UpdateFactory` owns the settings every fixture is built with. The
//! `MockUpdate::with_*` shortcuts use `UpdateFactory::default()`.

use crate::config::FixtureSettings;
use crate::models::{ChatType, MockCallbackQuery, MockMessage};
use crate::utils::errors::Result;
use crate::utils::helpers::key_or_generate;
use crate::utils::logging::{log_callback_built, log_fixture_built};

use super::{
    CallbackUpdate, CommandParams, CommandUpdate, InlineQueryParams, InlineQueryUpdate,
    MessageParams, MessageUpdate, UpdateKind,
};

/// Defaults a fixture keeps around for later decorations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FixtureDefaults {
    pub chat_type: ChatType,
}

impl FixtureDefaults {
    pub fn key(&self, supplied: Option<&str>) -> String {
        key_or_generate(supplied)
    }

    pub fn message(
        &self,
        message_id: Option<&str>,
        chat_id: Option<&str>,
        text: Option<&str>,
        text_markdown_urled: Option<&str>,
        chat_type: Option<ChatType>,
    ) -> MockMessage {
        MockMessage::new(
            self.key(message_id),
            self.key(chat_id),
            text.map(|s| s.to_string()),
            text_markdown_urled.map(|s| s.to_string()),
            chat_type.unwrap_or(self.chat_type),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFactory {
    settings: FixtureSettings,
}

impl UpdateFactory {
    pub fn new(settings: FixtureSettings) -> Self {
        Self { settings }
    }

    /// Build a factory from the `fixtures` file and `UPDATE_FIXTURES_*` variables
    pub fn from_env() -> Result<Self> {
        let settings = FixtureSettings::new()?;
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &FixtureSettings {
        &self.settings
    }

    fn defaults(&self) -> FixtureDefaults {
        FixtureDefaults {
            chat_type: self.settings.default_chat_type,
        }
    }

    /// Message update; decorate it with `with_photo` / `with_document`
    pub fn with_message(&self, params: MessageParams) -> MessageUpdate {
        let defaults = self.defaults();
        let message = defaults.message(
            params.message_id.as_deref(),
            params.chat_id.as_deref(),
            params.text.as_deref(),
            params.text_markdown_urled.as_deref(),
            params.chat_type,
        );
        log_fixture_built(UpdateKind::Message, &message.message_id);

        MessageUpdate { message, defaults }
    }

    /// Callback query update with no originating message attached
    pub fn with_callback_query(&self, data: Option<&str>) -> CallbackUpdate {
        let callback_query = MockCallbackQuery::new(data.map(|s| s.to_string()));
        log_callback_built(data);

        CallbackUpdate {
            callback_query,
            defaults: self.defaults(),
        }
    }

    /// Command update: a message carrying only routing identifiers
    pub fn with_command(&self, params: CommandParams) -> CommandUpdate {
        let message = self.defaults().message(
            params.message_id.as_deref(),
            params.chat_id.as_deref(),
            None,
            None,
            None,
        );
        log_fixture_built(UpdateKind::Command, &message.message_id);

        CommandUpdate { message }
    }

    pub fn with_inline_query(&self, params: InlineQueryParams) -> InlineQueryUpdate {
        let update = InlineQueryUpdate {
            query_id: self.defaults().key(params.query_id.as_deref()),
            query: params.query,
            offset: params.offset.unwrap_or_default(),
        };
        log_fixture_built(UpdateKind::InlineQuery, &update.query_id);

        update
    }
}
