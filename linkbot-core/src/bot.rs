//! Bot abstraction for sending messages and documents and fetching uploads.
//!
//! [`Bot`] is transport-agnostic; linkbot-telegram implements it via teloxide and tests substitute a
//! recording mock.

use crate::error::Result;
use crate::types::{Chat, DocumentRef, FileArtifact, Message};
use async_trait::async_trait;

/// Outbound side of the transport. Implementations map to a messaging platform (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a file to the given chat with an optional caption.
    async fn send_document(
        &self,
        chat: &Chat,
        artifact: &FileArtifact,
        caption: Option<&str>,
    ) -> Result<()>;

    /// Downloads the bytes of an uploaded document.
    async fn download_document(&self, document: &DocumentRef) -> Result<Vec<u8>>;
}
