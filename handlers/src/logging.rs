//! Logs each message in before() and the response in after(); always continues.
//!
//! Message text is never logged: wizard steps carry secrets such as the `/pw` token.

use async_trait::async_trait;
use linkbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::Command;

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let command = Command::parse(&message.content).map(|cmd| cmd.name);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_type = %message.message_type,
            command = ?command,
            content_len = message.content.len(),
            document = ?message.document.as_ref().and_then(|d| d.file_name.as_deref()),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
