//! Callback query updates

use crate::models::MockCallbackQuery;
use crate::utils::logging::log_decoration;

use super::factory::FixtureDefaults;
use super::{private, UpdateFixture, UpdateKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackUpdate {
    pub(crate) callback_query: MockCallbackQuery,
    pub(crate) defaults: FixtureDefaults,
}

impl CallbackUpdate {
    /// Attach the message whose inline keyboard produced the callback
    pub fn with_originating_message(mut self, message_id: Option<&str>, chat_id: Option<&str>) -> Self {
        let message = self.defaults.message(message_id, chat_id, None, None, None);
        log_decoration(UpdateKind::CallbackQuery, "originating_message", &message.message_id);
        self.callback_query.message = Some(message);
        self
    }
}

impl private::Sealed for CallbackUpdate {}

impl UpdateFixture for CallbackUpdate {
    fn kind(&self) -> UpdateKind {
        UpdateKind::CallbackQuery
    }

    fn callback_query(&self) -> Option<&MockCallbackQuery> {
        Some(&self.callback_query)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{MockUpdate, UpdateFixture};

    #[test]
    fn test_data_is_kept() {
        let update = MockUpdate::with_callback_query(Some("location:skip"));
        assert_eq!(update.callback_query().unwrap().data.as_deref(), Some("location:skip"));
    }

    #[test]
    fn test_originating_message_ids() {
        let update = MockUpdate::with_callback_query(None).with_originating_message(Some("7"), Some("99"));
        let message = update.callback_query().unwrap().message.as_ref().unwrap();

        assert_eq!(message.message_id, "7");
        assert_eq!(message.chat_id, "99");
        assert_eq!(message.text, None);
        assert!(update.message().is_none());
    }
}
