//! Shared reply and upload helpers.

use link_engine::StepInput;
use linkbot_core::{Bot, DocumentRef, FileArtifact, HandlerResponse, Message};
use tracing::{error, info, warn};

/// Reply sent when the transport fails underneath a handler.
pub const GENERIC_FAILURE: &str = "❌ Something went wrong. Please try again.";

/// Largest document the Bot API lets a bot download.
pub const MAX_DOWNLOAD_BYTES: u64 = 20 * 1024 * 1024;

pub const FILE_TOO_LARGE: &str = "❌ File is too large. Maximum size is 20 MB.";

/// Name used for uploads that arrive without one.
const UNNAMED_UPLOAD: &str = "upload.txt";

/// Replies to `message` and returns [`HandlerResponse::Reply`]. Send failures are logged only; the
/// user cannot be told about them anyway.
pub(crate) async fn send_reply(bot: &dyn Bot, message: &Message, text: &str) -> HandlerResponse {
    if let Err(e) = bot.reply_to(message, text).await {
        error!(error = %e, user_id = message.user.id, "Failed to send reply");
    }
    HandlerResponse::Reply(text.to_string())
}

/// Turns a message into wizard input, downloading its document when `wants` accepts it.
///
/// `Err` carries the reply to send while the wizard stays on its current step.
pub(crate) async fn receive_input<F>(
    bot: &dyn Bot,
    message: &Message,
    wants: F,
) -> Result<StepInput, &'static str>
where
    F: Fn(&DocumentRef) -> bool,
{
    let Some(document) = message.document.as_ref() else {
        return Ok(match message.text() {
            Some(text) => StepInput::Text(text.to_string()),
            None => StepInput::Unsupported,
        });
    };
    if !wants(document) {
        return Ok(StepInput::Unsupported);
    }
    if document.size > MAX_DOWNLOAD_BYTES {
        warn!(
            user_id = message.user.id,
            size = document.size,
            "Upload exceeds download limit"
        );
        return Err(FILE_TOO_LARGE);
    }

    let file_name = document
        .file_name
        .clone()
        .unwrap_or_else(|| UNNAMED_UPLOAD.to_string());
    match bot.download_document(document).await {
        Ok(content) => {
            info!(
                user_id = message.user.id,
                file_name = %file_name,
                bytes = content.len(),
                "Downloaded upload"
            );
            Ok(StepInput::Document(FileArtifact::new(file_name, content)))
        }
        Err(e) => {
            error!(error = %e, user_id = message.user.id, "Failed to download upload");
            Err(GENERIC_FAILURE)
        }
    }
}
