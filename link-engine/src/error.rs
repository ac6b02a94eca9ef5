//! Engine error taxonomy. Every variant is an expected, user-correctable condition; `Display` is the
//! text sent back to the user.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("You're already in a session. Send messages or use /over to finish.")]
    AlreadyActive,

    #[error("You're not in a session. Use /extract_txt to start.")]
    NoActiveSession,

    #[error("No content collected. File not generated.")]
    EmptyContent,

    /// `index` is the 1-based position of the offending line in the input.
    #[error("❌ Invalid format in line {index}: '{line}'. Use `text:link` format.")]
    LineFormat { line: String, index: usize },

    #[error("❌ No valid button pairs found. Try again.")]
    EmptyResult,

    #[error("❌ Invalid line range. Please try again.")]
    InvalidRange { from: i64, to: i64 },

    #[error("❌ Invalid format. Please use format: from-to (e.g. 1-10)")]
    RangeFormat,

    #[error("❌ The file is not valid UTF-8 text.")]
    InvalidEncoding,
}

impl EngineError {
    /// Shifts a [`EngineError::LineFormat`] position by `skipped` lines, for input that was sliced
    /// out of a longer text. Other variants are returned unchanged.
    pub(crate) fn skip_lines(self, skipped: usize) -> Self {
        match self {
            EngineError::LineFormat { line, index } => EngineError::LineFormat {
                line,
                index: index + skipped,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_lines_moves_line_format_index() {
        let err = EngineError::LineFormat {
            line: "bad".to_string(),
            index: 2,
        };
        assert_eq!(
            err.skip_lines(49).to_string(),
            "❌ Invalid format in line 51: 'bad'. Use `text:link` format."
        );
        assert_eq!(EngineError::EmptyResult.skip_lines(3), EngineError::EmptyResult);
    }
}
