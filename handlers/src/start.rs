//! `/start` and `/cancel`.

use std::sync::Arc;

use async_trait::async_trait;
use link_engine::WizardKey;
use linkbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::admin_log::AdminLog;
use crate::command::Command;
use crate::reply::send_reply;
use crate::wizards::Wizards;

/// Command overview sent on `/start`.
pub const OVERVIEW: &str = "🤖 This bot combines multiple functionalities:\n\n\
    1️⃣ /extract_txt - Extract text and links from messages\n\
    2️⃣ /pw - Convert PW DRM protected links\n\
    3️⃣ /html - Generate HTML files with button links\n\n\
    Use /cancel to abort a running /pw or /html.";

const CANCELLED: &str = "Operation cancelled.";

/// Replies to `/start` with the command overview and reports the new user to the admin channel.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    admin: AdminLog,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, admin: AdminLog) -> Self {
        Self { bot, admin }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            Some(cmd) if cmd.is("start") => {
                info!(user_id = message.user.id, "step: /start");
                self.admin
                    .notify(&message.user, "🚀 New User Started the Bot", None, None)
                    .await;
                Ok(send_reply(self.bot.as_ref(), message, OVERVIEW).await)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}

/// Discards any wizard in progress on `/cancel`.
pub struct CancelHandler {
    bot: Arc<dyn Bot>,
    wizards: Arc<Wizards>,
}

impl CancelHandler {
    pub fn new(bot: Arc<dyn Bot>, wizards: Arc<Wizards>) -> Self {
        Self { bot, wizards }
    }
}

#[async_trait]
impl Handler for CancelHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            Some(cmd) if cmd.is("cancel") => {
                let was_active = self.wizards.cancel(WizardKey::of(message));
                info!(user_id = message.user.id, was_active, "step: /cancel");
                Ok(send_reply(self.bot.as_ref(), message, CANCELLED).await)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
