//! Bot configuration: Telegram connection, admin channel and rewrite endpoints. Loaded from env.

use anyhow::{Context, Result};
use link_engine::RewriteConfig;
use linkbot_telegram::TelegramConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_CHANNEL_ID: admin channel for action logs and file copies; unset disables them.
    pub log_channel_id: Option<i64>,
    /// MANIFEST_PROXY_HOST, PLAYER_PROXY_ENDPOINT
    pub rewrite: RewriteConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_channel_id = match env::var("LOG_CHANNEL_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<i64>()
                    .with_context(|| format!("LOG_CHANNEL_ID is not an integer: {}", raw))?,
            ),
            _ => None,
        };

        let defaults = RewriteConfig::default();
        let rewrite = RewriteConfig {
            manifest_proxy_host: env::var("MANIFEST_PROXY_HOST")
                .unwrap_or(defaults.manifest_proxy_host),
            player_proxy_endpoint: env::var("PLAYER_PROXY_ENDPOINT")
                .unwrap_or(defaults.player_proxy_endpoint),
        };

        Ok(Self {
            telegram,
            log_channel_id,
            rewrite,
        })
    }

    /// Telegram settings must be valid, the proxy host must be a bare host and the player endpoint
    /// an absolute URL.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;

        let host = self.rewrite.manifest_proxy_host.trim();
        if host.is_empty() || host.contains('/') {
            anyhow::bail!(
                "MANIFEST_PROXY_HOST must be a host name without scheme or path: {:?}",
                self.rewrite.manifest_proxy_host
            );
        }
        let endpoint = self.rewrite.player_proxy_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            anyhow::bail!(
                "PLAYER_PROXY_ENDPOINT must be an http(s) URL: {:?}",
                self.rewrite.player_proxy_endpoint
            );
        }
        Ok(())
    }
}
