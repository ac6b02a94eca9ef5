//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for linkbot. Transport failures (sending, downloading) surface as
/// [`LinkbotError::Bot`].
#[derive(Error, Debug)]
pub enum LinkbotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`LinkbotError`].
pub type Result<T> = std::result::Result<T, LinkbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_error_display() {
        let err = LinkbotError::Bot("file not found: f1".to_string());
        assert_eq!(err.to_string(), "Bot error: file not found: f1");
    }
}
