//! # linkbot-core
//!
//! Core types and traits for the link bot: [`Bot`], [`Handler`], message, span, document and artifact
//! types, error types and tracing initialization. Transport-agnostic; used by handler-chain, handlers
//! and linkbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{LinkbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, DocumentRef, FileArtifact, Handler, HandlerResponse, Message, SpanKind, TextSpan,
    ToCoreMessage, ToCoreUser, User,
};
