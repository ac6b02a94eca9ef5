//! # linkbot-telegram
//!
//! Telegram layer: adapters from teloxide types, the [`linkbot_core::Bot`] implementation, minimal
//! config and the REPL runner. Knows nothing about the workflows themselves.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{span_from_entity, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
