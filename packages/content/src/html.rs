//! Tag stripping for editorial HTML.
//!
//! Pattern-based, not a structural parse. Only for trusted CMS content; this
//! is not a sanitizer and must not be used on user input.

use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Remove every tag from `html`, decode the common entities and collapse whitespace.
pub fn strip_tags(html: &str) -> String {
    let mut text = RE_TAG.replace_all(html, "").into_owned();
    // &amp; last so "&amp;lt;" decodes to "&lt;", not "<"
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    RE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            strip_tags("<p>Exploring <strong>how</strong> trade works.</p>"),
            "Exploring how trade works."
        );
    }

    #[test]
    fn test_collapses_whitespace_between_blocks() {
        assert_eq!(
            strip_tags("<h2>Title</h2>\n\n<p>First   paragraph.</p>\n"),
            "Title First paragraph."
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(strip_tags("<p>Fish &amp; chips&nbsp;&lt;3</p>"), "Fish & chips <3");
        assert_eq!(strip_tags("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_tags("No markup here"), "No markup here");
        assert_eq!(strip_tags(""), "");
    }
}
