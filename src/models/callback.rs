//! Callback query model

use serde::Serialize;

use super::MockMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockCallbackQuery {
    pub data: Option<String>,
    /// Message carrying the inline keyboard that was pressed
    pub message: Option<MockMessage>,
}

impl MockCallbackQuery {
    pub fn new(data: Option<String>) -> Self {
        Self { data, message: None }
    }
}
