//! Data-driven URL rewriting: one [`RewriteRule`] per pattern, applied uniformly to every match.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::config::{RewriteConfig, CDN_MEDIA_DOMAIN};
use crate::error::Result;
use crate::transform::pairs::{self, LinkPair};

/// Matches `https://<host>/<video_id>/master.mpd`; group 1 is the video id.
const MANIFEST_PATTERN: &str = r"https://[a-zA-Z0-9.-]+/([\w-]+)/master\.mpd";

/// A `{pattern, capture_group, template}` rewrite.
///
/// The template may reference `{capture}` (the chosen group of the match) and `{token}` (a value
/// supplied per call). Every match is replaced; identical matches get identical replacements.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    capture_group: usize,
    template: String,
}

impl RewriteRule {
    pub fn new(
        pattern: &str,
        capture_group: usize,
        template: impl Into<String>,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            capture_group,
            template: template.into(),
        })
    }

    /// The manifest rule: `https://{proxy_host}/{video_id}/master.m3u8?token={token}`.
    pub fn manifest(proxy_host: &str) -> Self {
        Self {
            pattern: manifest_regex().clone(),
            capture_group: 1,
            template: format!("https://{}/{{capture}}/master.m3u8?token={{token}}", proxy_host),
        }
    }

    /// Replaces every match in `content`; text outside matches is returned unchanged.
    pub fn apply(&self, content: &str, token: &str) -> String {
        self.pattern
            .replace_all(content, |caps: &Captures<'_>| {
                let capture = caps
                    .get(self.capture_group)
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                self.template
                    .replace("{capture}", capture)
                    .replace("{token}", token)
            })
            .into_owned()
    }

    /// Number of matches in `content`.
    pub fn count_matches(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }
}

fn manifest_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MANIFEST_PATTERN).expect("manifest pattern is a valid regex"))
}

/// Rewrites configured for one deployment: manifest links and CDN media links.
#[derive(Debug, Clone)]
pub struct Rewriter {
    manifest: RewriteRule,
    player_proxy_endpoint: String,
}

impl Rewriter {
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            manifest: RewriteRule::manifest(&config.manifest_proxy_host),
            player_proxy_endpoint: config.player_proxy_endpoint.clone(),
        }
    }

    /// Replaces every `.../{video_id}/master.mpd` link with the tokenized playback URL.
    pub fn rewrite_manifest_links(&self, content: &str, token: &str) -> String {
        self.manifest.apply(content, token)
    }

    pub fn count_manifest_links(&self, content: &str) -> usize {
        self.manifest.count_matches(content)
    }

    /// Routes CDN-hosted media URLs through the player endpoint; other URLs are returned as-is.
    pub fn rewrite_cdn_link(&self, url: &str) -> String {
        if url.contains(CDN_MEDIA_DOMAIN) {
            format!("{}?url={}", self.player_proxy_endpoint, url)
        } else {
            url.to_string()
        }
    }

    /// Parses `label:URL` lines; see [`parse_link_pairs`](crate::parse_link_pairs).
    pub fn parse_link_pairs<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<LinkPair>> {
        pairs::parse_with(lines, |url| self.rewrite_cdn_link(url))
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(&RewriteConfig::default())
    }
}

/// [`Rewriter::rewrite_manifest_links`] with the default proxy host.
pub fn rewrite_manifest_links(content: &str, token: &str) -> String {
    Rewriter::default().rewrite_manifest_links(content, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MANIFEST_PROXY_HOST;

    #[test]
    fn test_rewrites_single_link() {
        assert_eq!(
            rewrite_manifest_links("https://h.co/abc123/master.mpd", "T"),
            format!("https://{}/abc123/master.m3u8?token=T", DEFAULT_MANIFEST_PROXY_HOST)
        );
    }

    #[test]
    fn test_unmatched_text_unchanged() {
        let content = "Lecture 1: https://h.co/abc/index.m3u8\nno links here";
        assert_eq!(rewrite_manifest_links(content, "T"), content);
    }

    #[test]
    fn test_repeated_link_replaced_everywhere() {
        let content = "a https://h.co/v-1/master.mpd b https://h.co/v-1/master.mpd";
        let out = Rewriter::new(&RewriteConfig {
            manifest_proxy_host: "proxy.test".to_string(),
            ..RewriteConfig::default()
        })
        .rewrite_manifest_links(content, "tok");
        assert_eq!(
            out,
            "a https://proxy.test/v-1/master.m3u8?token=tok b https://proxy.test/v-1/master.m3u8?token=tok"
        );
    }

    #[test]
    fn test_distinct_links_each_replaced() {
        let content = "x:https://a.example/one/master.mpd\ny:https://b-2.example/two_2/master.mpd\n";
        let out = Rewriter::new(&RewriteConfig {
            manifest_proxy_host: "p.test".to_string(),
            ..RewriteConfig::default()
        })
        .rewrite_manifest_links(content, "K");
        assert_eq!(
            out,
            "x:https://p.test/one/master.m3u8?token=K\ny:https://p.test/two_2/master.m3u8?token=K\n"
        );
    }

    #[test]
    fn test_nested_path_is_not_a_manifest_link() {
        let content = "https://h.co/a/b/master.mpd";
        assert_eq!(rewrite_manifest_links(content, "T"), content);
    }

    #[test]
    fn test_token_inserted_literally() {
        let out = Rewriter::new(&RewriteConfig {
            manifest_proxy_host: "p.test".to_string(),
            ..RewriteConfig::default()
        })
        .rewrite_manifest_links("https://h.co/id/master.mpd", "a$1&b");
        assert_eq!(out, "https://p.test/id/master.m3u8?token=a$1&b");
    }

    #[test]
    fn test_custom_rule_uses_capture_group() {
        let rule = RewriteRule::new(r"youtu\.be/(\w+)", 1, "yt:{capture}").unwrap();
        assert_eq!(rule.apply("see youtu.be/abc now", ""), "see yt:abc now");
        assert_eq!(rule.count_matches("youtu.be/a youtu.be/b"), 2);
    }

    #[test]
    fn test_cdn_link_routed_through_player() {
        let rewriter = Rewriter::default();
        let url = "https://media-cdn.classplusapp.com/v/1";
        assert_eq!(
            rewriter.rewrite_cdn_link(url),
            format!("https://master-api-v3.vercel.app/nomis-player?url={}", url)
        );
        assert_eq!(rewriter.rewrite_cdn_link("https://x.com/1"), "https://x.com/1");
    }
}
