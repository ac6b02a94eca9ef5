use std::sync::Arc;

use anyhow::Result;
use linkbot_core::{init_tracing, Bot};
use linkbot_telegram::{run_repl, TelegramBotAdapter};
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.telegram.log_file)?;

    info!(
        log_file = %config.telegram.log_file,
        api_url = ?config.telegram.telegram_api_url,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let components = build_bot_components(&config, bot);
    let handler_chain = build_handler_chain(&components);

    info!(handlers = handler_chain.len(), "Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}
