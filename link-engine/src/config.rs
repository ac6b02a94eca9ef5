//! Rewrite endpoints used by the transform engine.

/// Host that serves rewritten manifest playback URLs.
pub const DEFAULT_MANIFEST_PROXY_HOST: &str = "madxabhi-pw.onrender.com";

/// Player endpoint that CDN-hosted media links are routed through.
pub const DEFAULT_PLAYER_PROXY_ENDPOINT: &str = "https://master-api-v3.vercel.app/nomis-player";

/// Domain whose links are routed through the player endpoint.
pub const CDN_MEDIA_DOMAIN: &str = "media-cdn.classplusapp.com";

/// Proxy endpoints for link rewriting. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Host (no scheme) for `https://{host}/{video_id}/master.m3u8?token={token}`.
    pub manifest_proxy_host: String,
    /// Full URL prefix for `{endpoint}?url={original}`.
    pub player_proxy_endpoint: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            manifest_proxy_host: DEFAULT_MANIFEST_PROXY_HOST.to_string(),
            player_proxy_endpoint: DEFAULT_PLAYER_PROXY_ENDPOINT.to_string(),
        }
    }
}
