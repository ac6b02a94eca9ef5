//! Text collection: `/extract_txt [name]`, plain text, `/over` and `/reset`.

use std::sync::Arc;

use async_trait::async_trait;
use link_engine::SessionStore;
use linkbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{debug, error, info, instrument};

use crate::command::Command;
use crate::reply::{send_reply, GENERIC_FAILURE};

const RESET_DONE: &str = "All user sessions have been reset.";

/// Drives the [`SessionStore`]. Plain text from users without a session passes through untouched.
pub struct CollectorHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<SessionStore>,
}

impl CollectorHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<SessionStore>) -> Self {
        Self { bot, sessions }
    }

    async fn start(&self, message: &Message, name: Option<&str>) -> HandlerResponse {
        let reply = match self.sessions.start(message.user.id, name) {
            Ok(started) => format!(
                "Started collecting text. Send messages, then type /over when done.\nYour file will be saved as: {}",
                started.file_name
            ),
            Err(e) => e.to_string(),
        };
        send_reply(self.bot.as_ref(), message, &reply).await
    }

    async fn finish(&self, message: &Message) -> HandlerResponse {
        let user_id = message.user.id;
        let finished = match self.sessions.finish(user_id) {
            Ok(finished) => finished,
            Err(e) => return send_reply(self.bot.as_ref(), message, &e.to_string()).await,
        };

        let sent = self
            .bot
            .send_document(&message.chat, finished.artifact(), None)
            .await;
        match sent {
            Ok(()) => {
                info!(
                    user_id,
                    file_name = %finished.artifact().file_name,
                    "Collected file delivered"
                );
                HandlerResponse::Stop
            }
            Err(e) => {
                error!(error = %e, user_id, "Failed to deliver collected file");
                let restored = finished.restore_into(&self.sessions);
                info!(user_id, restored, "Collection session kept after failed delivery");
                send_reply(self.bot.as_ref(), message, GENERIC_FAILURE).await
            }
        }
    }

    async fn reset(&self, message: &Message) -> HandlerResponse {
        self.sessions.reset_all();
        send_reply(self.bot.as_ref(), message, RESET_DONE).await
    }

    fn collect(&self, message: &Message, text: &str) -> HandlerResponse {
        match self.sessions.append(message.user.id, text, &message.entities) {
            Ok(appended) => {
                debug!(
                    user_id = message.user.id,
                    added = appended.added,
                    total = appended.total,
                    "Collected message"
                );
                HandlerResponse::Stop
            }
            Err(_) => HandlerResponse::Continue,
        }
    }
}

#[async_trait]
impl Handler for CollectorHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(cmd) = Command::parse(&message.content) {
            let response = if cmd.is("extract_txt") {
                self.start(message, cmd.first_arg()).await
            } else if cmd.is("over") {
                self.finish(message).await
            } else if cmd.is("reset") {
                self.reset(message).await
            } else {
                HandlerResponse::Continue
            };
            return Ok(response);
        }

        Ok(match message.text() {
            Some(text) => self.collect(message, text),
            None => HandlerResponse::Continue,
        })
    }
}
