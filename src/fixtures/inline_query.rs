//! Inline query updates

use serde::Serialize;

use super::{private, UpdateFixture, UpdateKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineQueryParams {
    pub query_id: Option<String>,
    pub query: Option<String>,
    /// `None` becomes the empty string
    pub offset: Option<String>,
}

/// Inline queries carry their fields directly instead of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineQueryUpdate {
    #[serde(rename = "id")]
    pub query_id: String,
    pub query: Option<String>,
    pub offset: String,
}

impl private::Sealed for InlineQueryUpdate {}

impl UpdateFixture for InlineQueryUpdate {
    fn kind(&self) -> UpdateKind {
        UpdateKind::InlineQuery
    }
}
