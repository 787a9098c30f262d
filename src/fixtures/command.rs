//! Command updates
//!
//! A command is a message where only the routing identifiers matter, so there
//! are no attachment decorations here.

use crate::models::MockMessage;

use super::{private, UpdateFixture, UpdateKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParams {
    pub message_id: Option<String>,
    pub chat_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandUpdate {
    pub(crate) message: MockMessage,
}

impl private::Sealed for CommandUpdate {}

impl UpdateFixture for CommandUpdate {
    fn kind(&self) -> UpdateKind {
        UpdateKind::Command
    }

    fn message(&self) -> Option<&MockMessage> {
        Some(&self.message)
    }
}
