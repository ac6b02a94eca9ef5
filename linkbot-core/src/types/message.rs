//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, document::DocumentRef, span::TextSpan, user::User};

/// A single inbound message: text (or caption), its annotated spans and an optional document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text, or the caption of a document; empty when neither is present.
    pub content: String,
    /// `"text"`, `"document"` or `"other"`.
    pub message_type: String,
    /// Spans over `content`.
    pub entities: Vec<TextSpan>,
    pub document: Option<DocumentRef>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The text when the message carries any, without a document.
    pub fn text(&self) -> Option<&str> {
        if self.document.is_none() && !self.content.is_empty() {
            Some(&self.content)
        } else {
            None
        }
    }
}
