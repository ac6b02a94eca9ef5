//! linkbot: run the Telegram bot. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use linkbot_cli::{run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}
