//! Markup normalization.
//!
//! Turns raw HTML into a flat string of text in which only a small set of
//! retained tags survives, in bare `<tag>`/`</tag>` form. The steps run in a
//! fixed order over a single owned buffer:
//!
//! 1. drop line breaks
//! 2. drop comments and styles, replace scripts with a space
//! 3. keep only the body
//! 4. strip every tag not on the retain list, then collapse whitespace
//! 5. rewrite aliased tags (`span` becomes `div`)
//! 6. decode known entities
//!
//! Entities are decoded last so that an encoded `&lt;` in the text can never
//! be mistaken for markup.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::entities;
use crate::options::Options;
use crate::patterns::{
    tag_pattern, ANY_TAG, HTML_COMMENT, LINE_BREAKS, SCRIPT_BLOCK, STYLE_BLOCK, WHITESPACE,
};

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{E000}(\\d+)\u{E001}").expect("PLACEHOLDER regex"));

static PLACEHOLDER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{E000}\u{E001}]").expect("PLACEHOLDER_CHARS regex"));

static BODY_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body(?:[\s/][^>]*)?>").expect("BODY_OPEN regex"));

static BODY_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</body").expect("BODY_CLOSE regex"));

/// A document part-way through normalization.
///
/// Each method applies one step in place. [`normalize`] runs them all in
/// the required order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    buffer: String,
}

impl NormalizedDocument {
    /// Starts from raw HTML and removes content-free markup (line breaks,
    /// comments, styles and scripts).
    #[must_use]
    pub fn new(html: &str) -> Self {
        let buffer = LINE_BREAKS.replace_all(html, "");
        let buffer = HTML_COMMENT.replace_all(&buffer, "");
        let buffer = STYLE_BLOCK.replace_all(&buffer, "");
        let buffer = SCRIPT_BLOCK.replace_all(&buffer, " ");
        Self {
            buffer: buffer.into_owned(),
        }
    }

    /// Keeps only what lies between the first `<body ...>` tag and the
    /// following `</body`.
    ///
    /// Without a body tag the document becomes empty. Without a closing tag
    /// the body runs to the end of the input.
    pub fn isolate_body(&mut self) {
        let Some(open) = BODY_OPEN.find(&self.buffer) else {
            debug!("no <body> tag found; document is empty");
            self.buffer.clear();
            return;
        };
        let start = open.end();
        let end = BODY_CLOSE
            .find_at(&self.buffer, start)
            .map_or(self.buffer.len(), |close| close.start());
        if end == self.buffer.len() {
            debug!("no </body> tag found; keeping everything after <body>");
        }
        self.buffer = self.buffer[start..end].to_string();
    }

    /// Removes every tag except the open and close forms of `retain_tags`,
    /// which are reduced to bare `<tag>` and `</tag>`. Removed tags become a
    /// single space and whitespace runs are collapsed.
    pub fn strip<S: AsRef<str>>(&mut self, retain_tags: &[S]) {
        let forms: Vec<String> = retain_tags
            .iter()
            .flat_map(|tag| {
                let tag = tag.as_ref();
                [tag.to_string(), format!("/{tag}")]
            })
            .collect();

        let mut buffer = PLACEHOLDER_CHARS.replace_all(&self.buffer, "").into_owned();
        for (index, form) in forms.iter().enumerate() {
            let placeholder = format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}");
            buffer = tag_pattern(form)
                .replace_all(&buffer, placeholder.as_str())
                .into_owned();
        }

        let buffer = ANY_TAG.replace_all(&buffer, " ");
        let buffer = PLACEHOLDER.replace_all(&buffer, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| forms.get(index))
                .map_or_else(String::new, |form| format!("<{form}>"))
        });
        self.buffer = WHITESPACE.replace_all(&buffer, " ").into_owned();
    }

    /// Rewrites the bare open and close forms of each `from` tag to `to`.
    pub fn convert<S: AsRef<str>>(&mut self, aliases: &[(S, S)]) {
        for (from, to) in aliases {
            let (from, to) = (from.as_ref(), to.as_ref());
            let open = format!("<{to}>");
            let close = format!("</{to}>");
            self.buffer = tag_pattern(from)
                .replace_all(&self.buffer, open.as_str())
                .into_owned();
            self.buffer = tag_pattern(&format!("/{from}"))
                .replace_all(&self.buffer, close.as_str())
                .into_owned();
        }
    }

    /// Decodes the known entity references.
    pub fn decode_entities(&mut self) {
        self.buffer = entities::decode_entities(&self.buffer);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// Runs the full normalization pipeline over `html`.
///
/// # Examples
///
/// ```
/// use articleparse::{normalizer::normalize, Options};
///
/// let html = r#"<html><body><div class="x"><p>Fish &amp; <b>chips</b></p></div></body></html>"#;
/// assert_eq!(normalize(html, &Options::default()), "<div> Fish & chips </div>");
/// ```
#[must_use]
pub fn normalize(html: &str, options: &Options) -> String {
    let mut doc = NormalizedDocument::new(html);
    doc.isolate_body();
    doc.strip(&options.retain_tags);
    doc.convert(&options.tag_aliases);
    doc.decode_entities();
    trace!(
        input_len = html.len(),
        normalized_len = doc.as_str().len(),
        "normalized document"
    );
    doc.into_string()
}
