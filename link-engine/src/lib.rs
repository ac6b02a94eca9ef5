//! # link-engine
//!
//! Transport-independent core of linkbot:
//!
//! - [`session`] – per-user text collection sessions ([`SessionStore`])
//! - [`transform`] – hyperlink extraction, manifest URL rewriting, `label:URL` parsing, line ranges
//! - [`render`] – HTML page rendering from a [`RenderRequest`]
//! - [`wizard`] – explicit state machines for the `/pw` and `/html` flows
//!
//! Everything here is synchronous and does no I/O; the handlers crate drives it.

pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod transform;
pub mod wizard;

pub use config::RewriteConfig;
pub use error::{EngineError, Result};
pub use render::{render, RenderRequest};
pub use session::{Appended, CollectionSession, FinishedSession, SessionStore, Started};
pub use transform::{
    extract_link_entries, non_blank_lines, parse_line_range, parse_link_pairs,
    rewrite_manifest_links, slice_line_range, LinkPair, RewriteRule, Rewriter,
};
pub use wizard::{
    HtmlDraft, HtmlWizard, PairSource, PwRequest, PwWizard, Step, StepInput, WizardKey,
    WizardStore,
};
