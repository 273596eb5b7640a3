//! Compiled regex patterns shared by the normalization and feature pipeline.
//!
//! All patterns are compiled once at first use with `LazyLock`. Patterns that
//! depend on configured tag names are built per call in [`tag_pattern`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Removal
// =============================================================================

/// Literal line breaks and the carriage-return entity.
pub static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+|&#0*13;").expect("LINE_BREAKS regex"));

/// HTML comments, including ones spanning what used to be several lines.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

/// `<style>` blocks with their contents.
pub static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style(?:[\s/][^>]*)?>.*?</style\s*>").expect("STYLE_BLOCK regex")
});

/// `<script>` blocks with their contents.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script(?:[\s/][^>]*)?>.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

/// Any tag that survived the retain pass.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("ANY_TAG regex"));

/// Runs of whitespace, collapsed to a single space.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

// =============================================================================
// Section Features
// =============================================================================

/// An anchor element; group 1 is the link text.
pub static ANCHOR_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a(?:[\s/][^>]*)?>(.*?)</a\s*>").expect("ANCHOR_PAIR regex")
});

/// An opening or closing anchor tag on its own.
pub static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?a(?:[\s/][^>]*)?>").expect("ANCHOR_TAG regex"));

/// Anything that is neither a word character nor whitespace.
pub static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("PUNCTUATION regex"));

/// Sentence terminators folded into `.` before splitting.
pub static SENTENCE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?!]").expect("SENTENCE_TERMINATOR regex"));

/// Builds a pattern matching one tag form from a retain-list entry.
///
/// `"div"` matches `<div>` and `<div class="x">` but not `<divider>` or
/// `</div>`; `"/div"` matches the closing form. Matching is ASCII
/// case-insensitive.
#[must_use]
pub fn tag_pattern(tag: &str) -> Regex {
    let (slash, name) = match tag.strip_prefix('/') {
        Some(name) => ("/", name),
        None => ("", tag),
    };
    let pattern = format!(r"(?i)<{slash}{}(?:[\s/][^>]*)?>", regex::escape(name));
    Regex::new(&pattern).expect("escaped tag name always forms a valid pattern")
}

/// Builds the segmentation boundary pattern for a container tag: the bare
/// open or close form, as left behind by the normalizer.
#[must_use]
pub fn container_boundary(tag: &str) -> Regex {
    let pattern = format!(r"(?i)</?{}>", regex::escape(tag));
    Regex::new(&pattern).expect("escaped tag name always forms a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_pattern_respects_name_boundary() {
        let anchor = tag_pattern("a");
        assert!(anchor.is_match("<a>"));
        assert!(anchor.is_match(r#"<a href="/x">"#));
        assert!(anchor.is_match("<A HREF=x>"));
        assert!(!anchor.is_match("<article>"));
        assert!(!anchor.is_match("<abbr title=x>"));
        assert!(!anchor.is_match("</a>"));
    }

    #[test]
    fn closing_tag_pattern_only_matches_close_form() {
        let close = tag_pattern("/div");
        assert!(close.is_match("</div>"));
        assert!(close.is_match("</DIV >"));
        assert!(!close.is_match("<div>"));
        assert!(!close.is_match("</divider>"));
    }

    #[test]
    fn container_boundary_matches_bare_forms() {
        let boundary = container_boundary("div");
        assert_eq!(boundary.split("a<div>b</div>c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn anchor_pair_captures_text_case_insensitively() {
        let caps: Vec<&str> = ANCHOR_PAIR
            .captures_iter(r#"<A href="/">Home</A> and <a>About us</a>"#)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        assert_eq!(caps, vec!["Home", "About us"]);
    }

    #[test]
    fn whitespace_collapses_mixed_runs() {
        assert_eq!(WHITESPACE.replace_all("a \t\u{a0} b", " "), "a b");
    }
}
