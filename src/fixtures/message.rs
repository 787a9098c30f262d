//! Message updates

use crate::models::{ChatType, MockMessage};
use crate::utils::logging::log_decoration;

use super::factory::FixtureDefaults;
use super::{private, UpdateFixture, UpdateKind};

/// Optional fields of a message update; anything left `None` is defaulted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageParams {
    pub message_id: Option<String>,
    pub chat_id: Option<String>,
    pub text: Option<String>,
    pub text_markdown_urled: Option<String>,
    /// `None` means the factory's default chat type
    pub chat_type: Option<ChatType>,
}

impl MessageParams {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageUpdate {
    pub(crate) message: MockMessage,
    pub(crate) defaults: FixtureDefaults,
}

impl MessageUpdate {
    /// Append a photo to the message and set its caption
    ///
    /// Each call adds another photo; the caption is replaced every time.
    pub fn with_photo(mut self, photo_file_id: Option<&str>, caption: Option<&str>) -> Self {
        let file_id = self.defaults.key(photo_file_id);
        log_decoration(UpdateKind::Message, "photo", &file_id);
        self.message.push_photo(file_id, caption.map(|s| s.to_string()));
        self
    }

    /// Attach a document, replacing any previous one
    pub fn with_document(mut self, file_id: Option<&str>, mime_type: Option<&str>) -> Self {
        let file_id = self.defaults.key(file_id);
        log_decoration(UpdateKind::Message, "document", &file_id);
        self.message.set_document(file_id, mime_type.map(|s| s.to_string()));
        self
    }
}

impl private::Sealed for MessageUpdate {}

impl UpdateFixture for MessageUpdate {
    fn kind(&self) -> UpdateKind {
        UpdateKind::Message
    }

    fn message(&self) -> Option<&MockMessage> {
        Some(&self.message)
    }
}
