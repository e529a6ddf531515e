//! Plain-text extraction from upstream HTML job descriptions.

use std::sync::LazyLock;

use regex::Regex;

// Script/style/title blocks are removed together with their content; a job
// description that embeds tracking scripts must not leak them into the
// cleaned text.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:script|style|title)\b[^>]*>.*?</(?:script|style|title)\s*>")
        .expect("valid regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strips markup from a raw HTML fragment and returns readable plain text.
///
/// Tags are replaced with spaces, a fixed set of common named entities is
/// decoded, and whitespace runs collapse to a single space. Empty input
/// yields an empty string; this function never fails.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = BLOCK_RE.replace_all(html, "");
    let text = TAG_RE.replace_all(&text, " ");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_simple_markup() {
        assert_eq!(
            strip_html("<p>Build <b>APIs</b>&nbsp;fast</p>"),
            "Build APIs fast"
        );
    }

    #[test]
    fn test_empty_input_returns_empty_string() {
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            strip_html("Senior Backend Engineer, Remote"),
            "Senior Backend Engineer, Remote"
        );
    }

    #[test]
    fn test_is_idempotent() {
        let raw = "<div><h1>Role</h1><p>We build &amp; ship <i>daily</i>.</p></div>";
        let once = strip_html(raw);
        let twice = strip_html(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_script_content_is_removed() {
        let raw = "<p>Apply now</p><script type=\"text/javascript\">track('view');</script>";
        assert_eq!(strip_html(raw), "Apply now");
    }

    #[test]
    fn test_style_and_title_content_are_removed() {
        let raw = "<title>Job Portal</title><style>.red { color: red; }</style><p>Rust Engineer</p>";
        assert_eq!(strip_html(raw), "Rust Engineer");
    }

    #[test]
    fn test_block_tags_match_case_insensitively() {
        let raw = "<SCRIPT>alert(1)</SCRIPT>Backend role";
        assert_eq!(strip_html(raw), "Backend role");
    }

    #[test]
    fn test_decodes_common_entities() {
        assert_eq!(
            strip_html("Fast &amp; reliable &lt;systems&gt; &quot;at scale&quot;"),
            "Fast & reliable <systems> \"at scale\""
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(strip_html("a\n\n  b\t\tc"), "a b c");
    }

    #[test]
    fn test_multiline_tags_and_content() {
        let raw = "<ul>\n<li>Rust</li>\n<li>Tokio</li>\n</ul>";
        assert_eq!(strip_html(raw), "Rust Tokio");
    }
}
