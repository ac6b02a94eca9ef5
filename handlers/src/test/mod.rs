//! Unit test module
//!
//! Handler unit tests live here, separate from source files. A recording [`MockBot`] stands in
//! for Telegram.



use std::sync::Arc;

use chrono::Utc;
use handler_chain::HandlerChain;
use link_engine::{Rewriter, SessionStore, WizardKey};
use linkbot_core::{Bot, Chat, DocumentRef, HandlerResponse, Message, TextSpan, User};

use crate::{
    AdminLog, CancelHandler, CollectorHandler, HtmlHandler, LoggingHandler, PwHandler,
    StartHandler, Wizards,
};

pub(crate) use mock_bot::MockBot;

pub(crate) const ADMIN_CHANNEL: i64 = -10042;

/// Every handler chained the way the binary wires them, over one [`MockBot`].
pub(crate) struct Harness {
    pub bot: Arc<MockBot>,
    pub sessions: Arc<SessionStore>,
    pub wizards: Arc<Wizards>,
    pub chain: HandlerChain,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_admin(Some(ADMIN_CHANNEL))
    }

    pub fn with_admin(channel: Option<i64>) -> Self {
        let bot = Arc::new(MockBot::new());
        let dyn_bot: Arc<dyn Bot> = bot.clone();
        let sessions = Arc::new(SessionStore::new());
        let wizards = Arc::new(Wizards::new());
        let rewriter = Arc::new(Rewriter::default());
        let admin = AdminLog::new(dyn_bot.clone(), channel);

        let chain = HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(StartHandler::new(dyn_bot.clone(), admin.clone())))
            .add_handler(Arc::new(CancelHandler::new(dyn_bot.clone(), wizards.clone())))
            .add_handler(Arc::new(PwHandler::new(
                dyn_bot.clone(),
                wizards.clone(),
                rewriter.clone(),
                admin.clone(),
            )))
            .add_handler(Arc::new(HtmlHandler::new(
                dyn_bot.clone(),
                wizards.clone(),
                rewriter,
                admin,
            )))
            .add_handler(Arc::new(CollectorHandler::new(dyn_bot, sessions.clone())));

        Self {
            bot,
            sessions,
            wizards,
            chain,
        }
    }

    pub async fn send(&self, message: Message) -> HandlerResponse {
        self.chain.handle(&message).await.unwrap()
    }

    pub async fn say(&self, user_id: i64, text: &str) -> HandlerResponse {
        self.send(text_message(user_id, text)).await
    }
}

pub(crate) fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn base_message(user_id: i64, content: &str, message_type: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: user(user_id),
        chat: Chat {
            id: user_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: message_type.to_string(),
        entities: Vec::new(),
        document: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn text_message(user_id: i64, content: &str) -> Message {
    base_message(user_id, content, "text")
}

/// Text from `user_id` in a group chat.
pub(crate) fn group_message(user_id: i64, chat_id: i64, content: &str) -> Message {
    let mut message = base_message(user_id, content, "text");
    message.chat = Chat {
        id: chat_id,
        chat_type: "group".to_string(),
    };
    message
}

/// Wizard key of the user's private chat (chat id equals user id).
pub(crate) fn key(user_id: i64) -> WizardKey {
    WizardKey::new(user_id, user_id)
}

pub(crate) fn linked_message(user_id: i64, content: &str, entities: Vec<TextSpan>) -> Message {
    let mut message = base_message(user_id, content, "text");
    message.entities = entities;
    message
}

pub(crate) fn document_message(user_id: i64, file_id: &str, file_name: &str, size: u64) -> Message {
    let mut message = base_message(user_id, "", "document");
    message.document = Some(DocumentRef {
        file_id: file_id.to_string(),
        file_name: Some(file_name.to_string()),
        size,
    });
    message
}
