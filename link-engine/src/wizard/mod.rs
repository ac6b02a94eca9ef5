//! Explicit state machines for the multi-step flows.
//!
//! Each wizard is an enum of "awaiting X" states. [`PwWizard::advance`] / [`HtmlWizard::advance`]
//! consume the current state and one [`StepInput`] and return a [`Step`]: move on, stay (invalid
//! input, state unchanged), or finish with the collected output. Progress per user and chat is kept in a
//! [`WizardStore`].

mod html;
mod pw;
mod store;

pub use html::{HtmlDraft, HtmlWizard, PairSource};
pub use pw::{PwRequest, PwWizard, REWRITTEN_FILE_PREFIX};
pub use store::{WizardKey, WizardStore};

use linkbot_core::FileArtifact;

/// One user input fed to a wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    Text(String),
    /// A downloaded document.
    Document(FileArtifact),
    /// Anything the current step cannot use (photo, sticker, unwanted document, ...).
    Unsupported,
}

/// Outcome of feeding one input to a wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<S, O> {
    /// Input accepted; continue in `state` and send `reply` (the next prompt).
    Next { state: S, reply: String },
    /// Input rejected; stay in `state` and send `reply` so the user can retry.
    Retry { state: S, reply: String },
    /// All input collected.
    Done(O),
}

impl<S, O> Step<S, O> {
    pub(crate) fn next(state: S, reply: impl Into<String>) -> Self {
        Step::Next {
            state,
            reply: reply.into(),
        }
    }

    pub(crate) fn retry(state: S, reply: impl Into<String>) -> Self {
        Step::Retry {
            state,
            reply: reply.into(),
        }
    }
}

/// Non-empty trimmed text of a text input.
fn text_of(input: &StepInput) -> Option<&str> {
    match input {
        StepInput::Text(text) => Some(text.trim()).filter(|t| !t.is_empty()),
        _ => None,
    }
}
