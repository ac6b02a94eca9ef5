//! `/pw`: upload a `.txt` file, send a token, get the file back with manifest links rewritten.

use linkbot_core::{DocumentRef, FileArtifact};

use super::{text_of, Step, StepInput};
use crate::error::EngineError;
use crate::transform::Rewriter;

/// Prefix of the rewritten file's name.
pub const REWRITTEN_FILE_PREFIX: &str = "pw_";

const FILE_PROMPT: &str = "📤 Send me your TXT file in which you want to change your links";
const TOKEN_PROMPT: &str = "✅ Your TXT file is received\n\n🔑 Please send me your token";
const FILE_RETRY: &str = "❌ Please send a .txt file.";
const TOKEN_RETRY: &str = "❌ Please send your token as a text message.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwWizard {
    AwaitingFile,
    /// The uploaded file, already decoded as UTF-8.
    AwaitingToken { file_name: String, content: String },
}

/// Everything collected by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PwRequest {
    pub file_name: String,
    pub content: String,
    pub token: String,
}

impl PwRequest {
    /// The uploaded file with every manifest link rewritten, named `pw_{original}`.
    pub fn rewritten(&self, rewriter: &Rewriter) -> FileArtifact {
        FileArtifact::new(
            format!("{}{}", REWRITTEN_FILE_PREFIX, self.file_name),
            rewriter.rewrite_manifest_links(&self.content, &self.token),
        )
    }
}

impl PwWizard {
    /// Initial state and the prompt to send.
    pub fn start() -> (Self, &'static str) {
        (PwWizard::AwaitingFile, FILE_PROMPT)
    }

    /// Whether `document` is worth downloading in the current state.
    pub fn wants_document(&self, document: &DocumentRef) -> bool {
        matches!(self, PwWizard::AwaitingFile) && document.has_extension("txt")
    }

    pub fn advance(self, input: StepInput) -> Step<Self, PwRequest> {
        match self {
            PwWizard::AwaitingFile => match input {
                StepInput::Document(file) => match String::from_utf8(file.content) {
                    Ok(content) => Step::next(
                        PwWizard::AwaitingToken {
                            file_name: file.file_name,
                            content,
                        },
                        TOKEN_PROMPT,
                    ),
                    Err(_) => Step::retry(
                        PwWizard::AwaitingFile,
                        EngineError::InvalidEncoding.to_string(),
                    ),
                },
                _ => Step::retry(PwWizard::AwaitingFile, FILE_RETRY),
            },
            PwWizard::AwaitingToken { file_name, content } => match text_of(&input) {
                Some(token) => Step::Done(PwRequest {
                    file_name,
                    content,
                    token: token.to_string(),
                }),
                None => Step::retry(PwWizard::AwaitingToken { file_name, content }, TOKEN_RETRY),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content: &[u8]) -> StepInput {
        StepInput::Document(FileArtifact::new(name, content.to_vec()))
    }

    fn doc(name: &str) -> DocumentRef {
        DocumentRef {
            file_id: "id".to_string(),
            file_name: Some(name.to_string()),
            size: 1,
        }
    }

    #[test]
    fn test_wants_only_txt_while_awaiting_file() {
        let (state, _) = PwWizard::start();
        assert!(state.wants_document(&doc("links.txt")));
        assert!(!state.wants_document(&doc("links.pdf")));

        let waiting_token = PwWizard::AwaitingToken {
            file_name: "a.txt".to_string(),
            content: String::new(),
        };
        assert!(!waiting_token.wants_document(&doc("links.txt")));
    }

    #[test]
    fn test_full_flow() {
        let (state, _) = PwWizard::start();
        let state = match state.advance(upload("batch.txt", b"x https://h.co/v1/master.mpd")) {
            Step::Next { state, reply } => {
                assert_eq!(reply, TOKEN_PROMPT);
                state
            }
            other => panic!("unexpected step: {:?}", other),
        };

        let request = match state.advance(StepInput::Text("  tok  ".to_string())) {
            Step::Done(request) => request,
            other => panic!("unexpected step: {:?}", other),
        };
        assert_eq!(request.token, "tok");

        let artifact = request.rewritten(&Rewriter::default());
        assert_eq!(artifact.file_name, "pw_batch.txt");
        assert_eq!(
            artifact.text(),
            Some("x https://madxabhi-pw.onrender.com/v1/master.m3u8?token=tok")
        );
    }

    #[test]
    fn test_text_while_awaiting_file_retries() {
        let step = PwWizard::AwaitingFile.advance(StepInput::Text("hello".to_string()));
        assert_eq!(step, Step::retry(PwWizard::AwaitingFile, FILE_RETRY));
    }

    #[test]
    fn test_invalid_utf8_retries() {
        let step = PwWizard::AwaitingFile.advance(upload("a.txt", &[0xff, 0xfe]));
        assert_eq!(
            step,
            Step::retry(PwWizard::AwaitingFile, EngineError::InvalidEncoding.to_string())
        );
    }

    #[test]
    fn test_blank_token_keeps_file() {
        let state = PwWizard::AwaitingToken {
            file_name: "a.txt".to_string(),
            content: "body".to_string(),
        };
        match state.clone().advance(StepInput::Text("   ".to_string())) {
            Step::Retry { state: kept, .. } => assert_eq!(kept, state),
            other => panic!("unexpected step: {:?}", other),
        }
    }
}
