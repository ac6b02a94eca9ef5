//! Core types: user, chat, message, text spans, documents, handler response, and Handler trait.
//!
//! Types are split into one file per main type for easier navigation.

mod chat;
mod document;
mod handler;
mod message;
mod response;
mod span;
mod user;

pub use chat::Chat;
pub use document::{DocumentRef, FileArtifact};
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use span::{SpanKind, TextSpan};
pub use user::User;
