//! Notifications to the administrative logging channel.

use std::sync::Arc;

use chrono::Local;
use linkbot_core::{Bot, Chat, FileArtifact, User};
use tracing::{debug, error, info};

/// Timestamp format used in channel entries and captions.
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn now() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Masks a secret for logs: first 7 chars + `***` + last 4, or `***` when it has 11 chars or fewer.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Sends action entries (and file copies) to the admin channel. Without a channel every call is a
/// no-op; delivery failures are logged and never reach the user.
#[derive(Clone)]
pub struct AdminLog {
    bot: Arc<dyn Bot>,
    channel: Option<Chat>,
}

impl AdminLog {
    pub fn new(bot: Arc<dyn Bot>, channel_id: Option<i64>) -> Self {
        Self {
            bot,
            channel: channel_id.map(Chat::channel),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.channel.is_some()
    }

    /// Channel entry for one user action.
    pub fn format_entry(
        user: &User,
        action: &str,
        file_name: Option<&str>,
        extra: Option<&str>,
        time: &str,
    ) -> String {
        let mut lines = vec![
            format!("📄 {}", action),
            format!("👤 User: {}", user.full_name()),
            format!("🆔 ID: {}", user.id),
            format!("📌 Username: {}", user.display_name()),
            format!("🕒 Time: {}", time),
        ];
        if let Some(file_name) = file_name {
            lines.push(format!("📁 File: {}", file_name));
        }
        if let Some(extra) = extra {
            lines.push(format!("ℹ️ Info: {}", extra));
        }
        lines.join("\n\n")
    }

    /// Posts an entry for `action`. Returns true when it was delivered.
    pub async fn notify(
        &self,
        user: &User,
        action: &str,
        file_name: Option<&str>,
        extra: Option<&str>,
    ) -> bool {
        let Some(channel) = &self.channel else {
            debug!(action, "Admin channel not configured, skipping notification");
            return false;
        };
        let entry = Self::format_entry(user, action, file_name, extra, &now());
        match self.bot.send_message(channel, &entry).await {
            Ok(()) => {
                info!(user_id = user.id, action, "Admin channel notified");
                true
            }
            Err(e) => {
                error!(error = %e, user_id = user.id, action, "Failed to log to admin channel");
                false
            }
        }
    }

    /// Posts a file with a caption. Returns true when it was delivered.
    pub async fn send_document(&self, artifact: &FileArtifact, caption: &str) -> bool {
        let Some(channel) = &self.channel else {
            debug!(file_name = %artifact.file_name, "Admin channel not configured, skipping file copy");
            return false;
        };
        match self.bot.send_document(channel, artifact, Some(caption)).await {
            Ok(()) => {
                info!(file_name = %artifact.file_name, "File copied to admin channel");
                true
            }
            Err(e) => {
                error!(error = %e, file_name = %artifact.file_name, "Failed to copy file to admin channel");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short_returns_all_star() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token("12345678901"), "***");
    }

    #[test]
    fn test_mask_token_long_shows_head_and_tail() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbGc***load");
        assert_eq!(mask_token("123456789012"), "1234567***9012");
    }

    #[test]
    fn test_mask_token_is_char_safe() {
        let masked = mask_token("ключключключключ");
        assert_eq!(masked, "ключклю***ключ");
    }

    #[test]
    fn test_format_entry() {
        let user = User {
            id: 7,
            username: None,
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        let entry = AdminLog::format_entry(
            &user,
            "File Uploaded",
            Some("a.txt"),
            None,
            "2024-01-01 10:00:00",
        );
        assert_eq!(
            entry,
            "📄 File Uploaded\n\n👤 User: Ada\n\n🆔 ID: 7\n\n📌 Username: Ada (ID: 7)\n\n🕒 Time: 2024-01-01 10:00:00\n\n📁 File: a.txt"
        );
    }
}
