//! # linkbot-cli
//!
//! CLI parsing, config loading and component wiring for the `linkbot` binary.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use runner::run_bot;
