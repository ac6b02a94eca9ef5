//! Annotated spans over a message's text (Telegram-style entities).

use serde::{Deserialize, Serialize};

/// What a [`TextSpan`] marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// Visible text that links to `url`.
    Hyperlink { url: String },
    /// Any other annotation (bold, mention, command, ...), kept by name only.
    Other(String),
}

/// A `(kind, offset, length)` annotation over a base string.
///
/// `offset` and `length` count UTF-16 code units, as Telegram does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub offset: usize,
    pub length: usize,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn hyperlink(offset: usize, length: usize, url: impl Into<String>) -> Self {
        Self {
            offset,
            length,
            kind: SpanKind::Hyperlink { url: url.into() },
        }
    }

    /// Target URL when this span is a hyperlink.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Hyperlink { url } => Some(url),
            SpanKind::Other(_) => None,
        }
    }

    /// The covered slice of `text`, or `None` when the span falls outside it or splits a character.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let end = self.offset.checked_add(self.length)?;
        let mut units = 0usize;
        let mut start_byte = None;
        let mut end_byte = None;
        for (byte_idx, ch) in text.char_indices() {
            if units == self.offset {
                start_byte = Some(byte_idx);
            }
            if units == end {
                end_byte = Some(byte_idx);
                break;
            }
            units += ch.len_utf16();
        }
        if units == self.offset && start_byte.is_none() {
            start_byte = Some(text.len());
        }
        if units == end && end_byte.is_none() {
            end_byte = Some(text.len());
        }
        text.get(start_byte?..end_byte?)
    }
}
