//! Message model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of chat a message belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    #[default]
    Private,
    Group,
    Supergroup,
    Channel,
    Sender,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Private => "private",
            ChatType::Group => "group",
            ChatType::Supergroup => "supergroup",
            ChatType::Channel => "channel",
            ChatType::Sender => "sender",
        }
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockChat {
    #[serde(rename = "type")]
    pub chat_type: ChatType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockPhoto {
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockDocument {
    pub file_id: String,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockMessage {
    pub message_id: String,
    pub chat_id: String,
    pub text: Option<String>,
    /// Escaped rendering of `text`; equals `text` unless a non-empty value is supplied
    pub text_markdown_urled: Option<String>,
    pub chat: MockChat,
    pub photo: Vec<MockPhoto>,
    pub caption: Option<String>,
    pub document: Option<MockDocument>,
}

impl MockMessage {
    /// Create a message without attachments
    pub fn new(
        message_id: String,
        chat_id: String,
        text: Option<String>,
        text_markdown_urled: Option<String>,
        chat_type: ChatType,
    ) -> Self {
        let text_markdown_urled = text_markdown_urled
            .filter(|markdown| !markdown.is_empty())
            .or_else(|| text.clone());
        Self {
            message_id,
            chat_id,
            text,
            text_markdown_urled,
            chat: MockChat { chat_type },
            photo: Vec::new(),
            caption: None,
            document: None,
        }
    }

    /// Append a photo and replace the caption
    pub fn push_photo(&mut self, file_id: String, caption: Option<String>) {
        self.photo.push(MockPhoto { file_id });
        self.caption = caption;
    }

    pub fn set_document(&mut self, file_id: String, mime_type: Option<String>) {
        self.document = Some(MockDocument { file_id, mime_type });
    }

    pub fn has_attachments(&self) -> bool {
        !self.photo.is_empty() || self.document.is_some()
    }
}
