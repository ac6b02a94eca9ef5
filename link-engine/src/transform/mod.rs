//! Pure text transforms: hyperlink extraction, manifest URL rewriting, `label:URL` parsing and line
//! range slicing.

mod entities;
mod pairs;
mod range;
mod rewrite;

pub use entities::extract_link_entries;
pub use pairs::{parse_link_pairs, LinkPair};
pub use range::{non_blank_lines, parse_line_range, slice_line_range};
pub use rewrite::{rewrite_manifest_links, RewriteRule, Rewriter};
