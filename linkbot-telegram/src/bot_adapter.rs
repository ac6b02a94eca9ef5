//! Wraps teloxide::Bot and implements [`linkbot_core::Bot`]. Tests substitute another Bot impl.

use async_trait::async_trait;
use linkbot_core::{Bot as CoreBot, Chat, DocumentRef, FileArtifact, LinkbotError, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements linkbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: impl std::fmt::Display) -> LinkbotError {
    LinkbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_document(
        &self,
        chat: &Chat,
        artifact: &FileArtifact,
        caption: Option<&str>,
    ) -> Result<()> {
        let file = InputFile::memory(artifact.content.clone()).file_name(artifact.file_name.clone());
        let request = self.bot.send_document(ChatId(chat.id), file);
        let request = match caption {
            Some(caption) => request.caption(caption.to_string()),
            None => request,
        };
        request.await.map_err(bot_error)?;
        debug!(
            chat_id = chat.id,
            file_name = %artifact.file_name,
            bytes = artifact.content.len(),
            "Document sent"
        );
        Ok(())
    }

    async fn download_document(&self, document: &DocumentRef) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(document.file_id.clone()))
            .await
            .map_err(bot_error)?;
        let mut buf = Vec::new();
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(bot_error)?;
        Ok(buf)
    }
}
