pub mod fetcher;
pub mod web;

pub use fetcher::Fetcher;
pub use web::WebFetcher;

use regex::Regex;
use std::sync::LazyLock;

static HTML_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<html[\s>]").expect("html open pattern is valid"));
static HTML_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</html\s*>").expect("html close pattern is valid"));

/// True if the body contains both an opening and a closing `html` tag
pub fn looks_like_html(body: &str) -> bool {
    HTML_OPEN_RE.is_match(body) && HTML_CLOSE_RE.is_match(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<html><body></body></html>"));
        assert!(looks_like_html("<!DOCTYPE html>\n<HTML lang=\"en\">\n</HTML>"));
        assert!(looks_like_html("<html\n>x</html >"));

        assert!(!looks_like_html("<html><body>truncated"));
        assert!(!looks_like_html("{\"error\": \"rate limited\"}"));
        assert!(!looks_like_html("<htmlfoo></html>"));
        assert!(!looks_like_html(""));
    }
}
