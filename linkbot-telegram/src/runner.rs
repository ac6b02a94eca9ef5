//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use linkbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
///
/// The chain is awaited inside the REPL callback. The dispatcher processes one chat's updates
/// sequentially, so a user's messages reach the chain in arrival order; different chats still run
/// concurrently.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                message_type = %core_msg.message_type,
                "step: processing message (handler chain started)"
            );
            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}
