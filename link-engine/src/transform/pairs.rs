use tracing::debug;

use crate::error::{EngineError, Result};
use crate::transform::rewrite::Rewriter;

/// A (label, URL) tuple destined for a generated navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    pub label: String,
    pub url: String,
}

impl LinkPair {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Parses `label:URL` lines with the default [`Rewriter`].
///
/// Blank lines are skipped. Each other line is split on its first `:`; both sides are trimmed and
/// must be non-empty. The first offending line fails the whole parse with
/// [`EngineError::LineFormat`]. CDN media URLs are routed through the player endpoint.
/// Zero pairs yields [`EngineError::EmptyResult`].
pub fn parse_link_pairs<S: AsRef<str>>(lines: &[S]) -> Result<Vec<LinkPair>> {
    Rewriter::default().parse_link_pairs(lines)
}

pub(crate) fn parse_with<S, F>(lines: &[S], rewrite_url: F) -> Result<Vec<LinkPair>>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut pairs = Vec::new();
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let format_error = || EngineError::LineFormat {
            line: line.to_string(),
            index: idx + 1,
        };
        let (label, url) = line.split_once(':').ok_or_else(format_error)?;
        let (label, url) = (label.trim(), url.trim());
        if label.is_empty() || url.is_empty() {
            return Err(format_error());
        }
        pairs.push(LinkPair::new(label, rewrite_url(url)));
    }

    if pairs.is_empty() {
        return Err(EngineError::EmptyResult);
    }
    debug!(pairs = pairs.len(), "parsed link pairs");
    Ok(pairs)
}
