//! Shared state and handler chain wiring.

use std::sync::Arc;

use handler_chain::HandlerChain;
use handlers::{
    AdminLog, CancelHandler, CollectorHandler, HtmlHandler, LoggingHandler, PwHandler,
    StartHandler, Wizards,
};
use link_engine::{Rewriter, SessionStore};
use linkbot_core::Bot;
use tracing::info;

use crate::config::BotConfig;

/// Long-lived state shared by the handlers. Stores are owned here and injected, never global.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub sessions: Arc<SessionStore>,
    pub wizards: Arc<Wizards>,
    pub rewriter: Arc<Rewriter>,
    pub admin: AdminLog,
}

pub fn build_bot_components(config: &BotConfig, bot: Arc<dyn Bot>) -> BotComponents {
    let admin = AdminLog::new(bot.clone(), config.log_channel_id);
    info!(
        admin_channel = ?config.log_channel_id,
        manifest_proxy_host = %config.rewrite.manifest_proxy_host,
        "Bot components built"
    );
    BotComponents {
        bot,
        sessions: Arc::new(SessionStore::new()),
        wizards: Arc::new(Wizards::new()),
        rewriter: Arc::new(Rewriter::new(&config.rewrite)),
        admin,
    }
}

/// Logging → /start → /cancel → /pw → /html → collector. Wizards come before the collector so
/// wizard input is never collected.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let c = components;
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(c.bot.clone(), c.admin.clone())))
        .add_handler(Arc::new(CancelHandler::new(c.bot.clone(), c.wizards.clone())))
        .add_handler(Arc::new(PwHandler::new(
            c.bot.clone(),
            c.wizards.clone(),
            c.rewriter.clone(),
            c.admin.clone(),
        )))
        .add_handler(Arc::new(HtmlHandler::new(
            c.bot.clone(),
            c.wizards.clone(),
            c.rewriter.clone(),
            c.admin.clone(),
        )))
        .add_handler(Arc::new(CollectorHandler::new(
            c.bot.clone(),
            c.sessions.clone(),
        )))
}
