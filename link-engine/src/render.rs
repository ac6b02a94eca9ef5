//! HTML page rendering.
//!
//! [`render`] is pure: the same [`RenderRequest`] always produces the same bytes. Every user-supplied
//! value is escaped for a quoted attribute context (`&`, `<`, `>`, `"`, `'`), which is also safe in
//! text content, and URLs only ever appear inside `href` attributes.

use std::fmt::Write;

use html_escape::encode_quoted_attribute;

use crate::transform::LinkPair;

/// Label of the fixed trailing navigation item.
pub const TRAILING_ITEM_LABEL: &str = "How To Process Links";

/// Target of the fixed trailing navigation item.
pub const TRAILING_ITEM_URL: &str = "https://youtu.be/Tba8arFqBFw?si=q01kKfamn4rKW_er";

/// Everything the page is built from, collected by the `/html` wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderRequest {
    /// Output name without the `.html` extension.
    pub file_name: String,
    /// Page `<title>`.
    pub title: String,
    /// Display name shown in the glitch heading.
    pub glitch: String,
    /// Platform / class name.
    pub platform: String,
    /// Header line (e.g. instructor and chapter).
    pub header: String,
    pub pairs: Vec<LinkPair>,
}

impl RenderRequest {
    pub fn output_file_name(&self) -> String {
        format!("{}.html", self.file_name)
    }
}

fn nav_item(out: &mut String, label: &str, url: &str) {
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        "\n            <li><a href=\"{}\" target=\"_blank\" rel=\"noopener\"><button class=\"lecture-button\">{}</button></a></li>",
        encode_quoted_attribute(url),
        encode_quoted_attribute(label)
    );
}

/// Renders the complete, self-contained HTML document.
///
/// One navigation item per pair in input order, followed by one fixed trailing item.
pub fn render(request: &RenderRequest) -> String {
    let mut items = String::new();
    for pair in &request.pairs {
        nav_item(&mut items, &pair.label, &pair.url);
    }
    nav_item(&mut items, TRAILING_ITEM_LABEL, TRAILING_ITEM_URL);

    let title = encode_quoted_attribute(&request.title);
    let glitch = encode_quoted_attribute(&request.glitch);
    let platform = encode_quoted_attribute(&request.platform);
    let header = encode_quoted_attribute(&request.header);

    let mut page = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + items.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("    <meta charset=\"UTF-8\">\n");
    page.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(page, "    <title>{}</title>", title);
    page.push_str(PAGE_HEAD);
    page.push_str("<body>\n    <div class=\"kanji-rain\" id=\"kanjiRain\"></div>\n\n");
    page.push_str("    <div class=\"container\">\n");
    let _ = writeln!(
        page,
        "        <h1 class=\"glitch\" data-text=\"{}\">{}</h1>",
        glitch, glitch
    );
    let _ = writeln!(page, "        <h2>{}</h2>", platform);
    let _ = writeln!(page, "        <h3>{}</h3>", header);
    page.push_str("        <ul class=\"lecture-list\">");
    page.push_str(&items);
    page.push_str("\n        </ul>\n    </div>\n\n");
    let _ = writeln!(
        page,
        "    <div class=\"footer\">\n        <p>From <span>{}</span></p>\n    </div>",
        platform
    );
    page.push_str(PAGE_TAIL);
    page
}

const PAGE_HEAD: &str = r#"    <link href="https://fonts.googleapis.com/css2?family=Orbitron:wght@400;500;600;700&family=Rajdhani:wght@400;500;600;700&display=swap" rel="stylesheet">
    <style>
        :root {
          --neon-purple: #bc13fe;
          --neon-pink: #ff00ff;
          --neon-blue: #00ffff;
          --neon-green: #00ff41;
          --dark-purple: #8e44ad;
          --deep-black: #000000;
          --dark-gray: #121212;
          --light-gray: #bdc3c7;
          --matrix-green: #0f0;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
          font-family: 'Rajdhani', sans-serif;
          background: var(--deep-black);
          color: var(--light-gray);
          min-height: 100vh;
          overflow-x: hidden;
        }
        .kanji-rain { position: fixed; inset: 0; pointer-events: none; z-index: 0; opacity: 0.15; }
        .kanji-rain span { position: absolute; top: -2em; color: var(--matrix-green); animation: fall linear infinite; }
        @keyframes fall { to { transform: translateY(110vh); } }
        .container { position: relative; z-index: 1; max-width: 900px; margin: 0 auto; padding: 40px 20px; text-align: center; }
        .glitch { font-family: 'Orbitron', sans-serif; font-size: 2.6rem; color: var(--neon-blue); text-shadow: 2px 0 var(--neon-pink), -2px 0 var(--neon-purple); margin-bottom: 16px; }
        h2 { font-family: 'Orbitron', sans-serif; color: var(--neon-pink); margin-bottom: 12px; }
        h3 { color: var(--neon-green); margin-bottom: 28px; }
        .lecture-list { list-style: none; display: grid; gap: 14px; }
        .lecture-list a { text-decoration: none; }
        .lecture-button {
          width: 100%;
          padding: 14px 18px;
          font-family: 'Orbitron', sans-serif;
          font-size: 1rem;
          color: var(--neon-blue);
          background: var(--dark-gray);
          border: 2px solid var(--neon-purple);
          border-radius: 8px;
          cursor: pointer;
          transition: box-shadow 0.2s, transform 0.2s;
        }
        .lecture-button:hover { box-shadow: 0 0 12px var(--neon-purple); transform: translateY(-2px); }
        .footer { position: relative; z-index: 1; text-align: center; padding: 24px; border-top: 1px solid var(--dark-purple); }
        .footer span { color: var(--neon-pink); }
        .back-to-top { position: fixed; right: 20px; bottom: 20px; z-index: 2; padding: 10px 14px; border: none; border-radius: 50%; background: var(--dark-purple); cursor: pointer; }
    </style>
</head>
"#;

const PAGE_TAIL: &str = r#"
    <button class="back-to-top" onclick="scrollToTop()">⬆️</button>

    <script>
        function scrollToTop() {
            window.scrollTo({ top: 0, behavior: 'smooth' });
        }
        (function () {
            var rain = document.getElementById('kanjiRain');
            var glyphs = 'アイウエオカキクケコサシスセソタチツテト';
            for (var i = 0; i < 40; i++) {
                var s = document.createElement('span');
                s.textContent = glyphs.charAt(Math.floor(Math.random() * glyphs.length));
                s.style.left = Math.random() * 100 + 'vw';
                s.style.animationDuration = 4 + Math.random() * 6 + 's';
                s.style.animationDelay = Math.random() * 5 + 's';
                rain.appendChild(s);
            }
        })();
    </script>
</body>
</html>
"#;
