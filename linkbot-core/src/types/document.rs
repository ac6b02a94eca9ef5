//! Uploaded documents and produced file artifacts.

use serde::{Deserialize, Serialize};

/// An uploaded document that has not been downloaded yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Transport-specific file id used to download the content.
    pub file_id: String,
    pub file_name: Option<String>,
    /// Size in bytes as reported by the transport.
    pub size: u64,
}

impl DocumentRef {
    /// True when the file name ends with `.{extension}` (case-insensitive).
    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false)
    }
}

/// A `(file_name, bytes)` pair produced by the bot and handed to the transport for delivery.
///
/// Content is kept in memory; no temporary file outlives the request that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileArtifact {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FileArtifact {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Content as UTF-8 text, if valid.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Same content under another name.
    pub fn renamed(&self, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: Option<&str>) -> DocumentRef {
        DocumentRef {
            file_id: "f1".to_string(),
            file_name: name.map(String::from),
            size: 10,
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(doc(Some("links.txt")).has_extension("txt"));
        assert!(doc(Some("LINKS.TXT")).has_extension("txt"));
        assert!(!doc(Some("links.pdf")).has_extension("txt"));
        assert!(!doc(Some("txt")).has_extension("txt"));
        assert!(!doc(None).has_extension("txt"));
    }

    #[test]
    fn test_artifact_text() {
        assert_eq!(FileArtifact::new("a.txt", "hi").text(), Some("hi"));
        assert_eq!(FileArtifact::new("a.bin", vec![0xff, 0xfe]).text(), None);
    }
}
