//! Telegram connection settings: token, API URL, log path. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Default log file when `LOG_FILE` is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/linkbot.log";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Uses the given token; everything else at its default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// The token must be non-empty and the API URL, if set, must parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// teloxide Bot for this token, pointed at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["BOT_TOKEN", "TELEGRAM_API_URL", "TELOXIDE_API_URL", "LOG_FILE"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
        env::set_var("LOG_FILE", "logs/test.log");

        let config = TelegramConfig::load(None).unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        assert_eq!(config.log_file, "logs/test.log");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_token_argument_overrides_env() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        let config = TelegramConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token_is_an_error() {
        clear_env();
        assert!(TelegramConfig::load(None).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not a url".to_string());
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }
}
