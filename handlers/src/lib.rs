//! # Handlers for linkbot
//!
//! One [`Handler`](linkbot_core::Handler) per workflow, meant to be chained in this order:
//!
//! - [`LoggingHandler`] – logs every message and the final response
//! - [`StartHandler`] – `/start` overview
//! - [`CancelHandler`] – `/cancel` for any wizard in progress
//! - [`PwHandler`] – `/pw` manifest link wizard
//! - [`HtmlHandler`] – `/html` page wizard
//! - [`CollectorHandler`] – `/extract_txt`, `/over`, `/reset` and plain text collection
//!
//! Wizards sit before the collector so that text sent during a wizard step is never collected.

mod admin_log;
mod collector;
mod command;
mod html;
mod logging;
mod pw;
mod reply;
mod start;
mod wizards;

#[cfg(test)]
mod test;

pub use admin_log::{mask_token, AdminLog};
pub use collector::CollectorHandler;
pub use command::Command;
pub use html::HtmlHandler;
pub use logging::LoggingHandler;
pub use pw::PwHandler;
pub use reply::{FILE_TOO_LARGE, GENERIC_FAILURE, MAX_DOWNLOAD_BYTES};
pub use start::{CancelHandler, StartHandler, OVERVIEW};
pub use wizards::Wizards;
