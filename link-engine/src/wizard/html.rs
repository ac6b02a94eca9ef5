//! `/html`: collect page fields and `label:URL` pairs, typed in or taken from a line range of an
//! uploaded file, and produce a [`RenderRequest`].

use linkbot_core::DocumentRef;

use super::{text_of, Step, StepInput};
use crate::error::EngineError;
use crate::render::RenderRequest;
use crate::transform::{non_blank_lines, parse_line_range, slice_line_range, Rewriter};

const FILENAME_PROMPT: &str = "📄 Please send me the filename you want for your HTML file (without .html extension)\n\nExample: my_lectures";
const TITLE_PROMPT: &str = "Send me the text that you want to be page title";
const NAME_PROMPT: &str = "Now send me your name";
const PLATFORM_PROMPT: &str = "Now send coaching platform name";
const HEADER_PROMPT: &str = "Now send me sir name and chapter name";
const METHOD_PROMPT: &str = "📌 How do you want to send button links?\n\n\
    1️⃣ Manual Input – Send text:link pairs (one per line)\n\
    2️⃣ Upload TXT File – Send a .txt file with text:link pairs\n\n\
    Reply with 1 or 2";
const MANUAL_PROMPT: &str = "📝 Send your button texts & links in this format (one per line):\n\n\
    Example:\n\
    Lecture 1:https://example.com/1\n\
    Lecture 2:https://example.com/2";
const FILE_PROMPT: &str = "📤 Please upload a .txt file containing text:link pairs (one per line).\n\n\
    Then send the line range you want to process in format:\n\
    from-to\n\n\
    Example: 1-10 (will process lines 1 to 10)";
const RANGE_PROMPT: &str = "📝 Now send the line range you want to process (e.g. 1-10):";

const FILENAME_RETRY: &str = "❌ Invalid filename. Please try again.";
const METHOD_RETRY: &str = "❌ Invalid choice. Please reply with 1 or 2.";
const UPLOAD_RETRY: &str = "❌ Please upload a .txt file first.";
const PAIRS_RETRY: &str = "❌ No pairs found. Please try again.";

/// Page fields collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlDraft {
    pub file_name: String,
    pub title: String,
    pub glitch: String,
    pub platform: String,
    pub header: String,
}

/// Where the `label:URL` pairs come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSource {
    /// Typed into the chat, one pair per line.
    Manual,
    /// Lines of an uploaded text file, narrowed by a line range.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlWizard {
    AwaitingFilename,
    AwaitingTitle { draft: HtmlDraft },
    AwaitingName { draft: HtmlDraft },
    AwaitingPlatform { draft: HtmlDraft },
    AwaitingHeader { draft: HtmlDraft },
    AwaitingMethodChoice { draft: HtmlDraft },
    AwaitingPairsOrFile { draft: HtmlDraft, source: PairSource },
    /// Non-blank lines of the uploaded file.
    AwaitingLineRange { draft: HtmlDraft, lines: Vec<String> },
}

impl HtmlWizard {
    /// Initial state and the prompt to send.
    pub fn start() -> (Self, &'static str) {
        (HtmlWizard::AwaitingFilename, FILENAME_PROMPT)
    }

    pub fn wants_document(&self, _document: &DocumentRef) -> bool {
        matches!(
            self,
            HtmlWizard::AwaitingPairsOrFile {
                source: PairSource::File,
                ..
            }
        )
    }

    pub fn advance(self, input: StepInput, rewriter: &Rewriter) -> Step<Self, RenderRequest> {
        use HtmlWizard::*;

        match self {
            AwaitingFilename => match text_of(&input) {
                Some(name) => {
                    let draft = HtmlDraft {
                        file_name: name.to_string(),
                        ..HtmlDraft::default()
                    };
                    Step::next(AwaitingTitle { draft }, TITLE_PROMPT)
                }
                None => Step::retry(AwaitingFilename, FILENAME_RETRY),
            },
            AwaitingTitle { mut draft } => match text_of(&input) {
                Some(title) => {
                    draft.title = title.to_string();
                    Step::next(AwaitingName { draft }, NAME_PROMPT)
                }
                None => Step::retry(AwaitingTitle { draft }, TITLE_PROMPT),
            },
            AwaitingName { mut draft } => match text_of(&input) {
                Some(name) => {
                    draft.glitch = name.to_string();
                    Step::next(AwaitingPlatform { draft }, PLATFORM_PROMPT)
                }
                None => Step::retry(AwaitingName { draft }, NAME_PROMPT),
            },
            AwaitingPlatform { mut draft } => match text_of(&input) {
                Some(platform) => {
                    draft.platform = platform.to_string();
                    Step::next(AwaitingHeader { draft }, HEADER_PROMPT)
                }
                None => Step::retry(AwaitingPlatform { draft }, PLATFORM_PROMPT),
            },
            AwaitingHeader { mut draft } => match text_of(&input) {
                Some(header) => {
                    draft.header = header.to_string();
                    Step::next(AwaitingMethodChoice { draft }, METHOD_PROMPT)
                }
                None => Step::retry(AwaitingHeader { draft }, HEADER_PROMPT),
            },
            AwaitingMethodChoice { draft } => match text_of(&input) {
                Some("1") => Step::next(
                    AwaitingPairsOrFile {
                        draft,
                        source: PairSource::Manual,
                    },
                    MANUAL_PROMPT,
                ),
                Some("2") => Step::next(
                    AwaitingPairsOrFile {
                        draft,
                        source: PairSource::File,
                    },
                    FILE_PROMPT,
                ),
                _ => Step::retry(AwaitingMethodChoice { draft }, METHOD_RETRY),
            },
            AwaitingPairsOrFile {
                draft,
                source: PairSource::Manual,
            } => {
                let lines = match text_of(&input) {
                    Some(text) => non_blank_lines(text),
                    None => {
                        let state = AwaitingPairsOrFile {
                            draft,
                            source: PairSource::Manual,
                        };
                        return Step::retry(state, PAIRS_RETRY);
                    }
                };
                match rewriter.parse_link_pairs(&lines) {
                    Ok(pairs) => Step::Done(finish(draft, pairs)),
                    Err(e) => Step::retry(
                        AwaitingPairsOrFile {
                            draft,
                            source: PairSource::Manual,
                        },
                        e.to_string(),
                    ),
                }
            }
            AwaitingPairsOrFile {
                draft,
                source: PairSource::File,
            } => {
                let state = |draft| AwaitingPairsOrFile {
                    draft,
                    source: PairSource::File,
                };
                let file = match input {
                    StepInput::Document(file) => file,
                    _ => return Step::retry(state(draft), UPLOAD_RETRY),
                };
                let lines = match file.text() {
                    Some(text) => non_blank_lines(text),
                    None => {
                        return Step::retry(state(draft), EngineError::InvalidEncoding.to_string())
                    }
                };
                if lines.is_empty() {
                    return Step::retry(state(draft), EngineError::EmptyResult.to_string());
                }
                Step::next(AwaitingLineRange { draft, lines }, RANGE_PROMPT)
            }
            AwaitingLineRange { draft, lines } => {
                let Some(text) = text_of(&input) else {
                    return Step::retry(AwaitingLineRange { draft, lines }, RANGE_PROMPT);
                };
                let pairs = parse_line_range(text).and_then(|(from, to)| {
                    let selected = slice_line_range(&lines, from, to)?;
                    let skipped = usize::try_from(from - 1).unwrap_or_default();
                    rewriter
                        .parse_link_pairs(&selected)
                        .map_err(|e| e.skip_lines(skipped))
                });
                match pairs {
                    Ok(pairs) => Step::Done(finish(draft, pairs)),
                    Err(e) => Step::retry(AwaitingLineRange { draft, lines }, e.to_string()),
                }
            }
        }
    }
}

fn finish(draft: HtmlDraft, pairs: Vec<crate::transform::LinkPair>) -> RenderRequest {
    RenderRequest {
        file_name: draft.file_name,
        title: draft.title,
        glitch: draft.glitch,
        platform: draft.platform,
        header: draft.header,
        pairs,
    }
}
