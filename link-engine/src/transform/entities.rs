use linkbot_core::{SpanKind, TextSpan};
use tracing::debug;

/// Formats every hyperlink span of `text` as `"{visible_text} : {url}"`, in span order.
///
/// Non-hyperlink spans are ignored, as are spans that do not fall inside `text`.
pub fn extract_link_entries(text: &str, entities: &[TextSpan]) -> Vec<String> {
    entities
        .iter()
        .filter_map(|span| match &span.kind {
            SpanKind::Hyperlink { url } => match span.slice(text) {
                Some(label) => Some(format!("{} : {}", label, url)),
                None => {
                    debug!(
                        offset = span.offset,
                        length = span.length,
                        "hyperlink span outside message text, skipped"
                    );
                    None
                }
            },
            SpanKind::Other(_) => None,
        })
        .collect()
}
