//! Decoding raw HTML bytes into text.
//!
//! The analysis core works on `&str`. Callers holding bytes of unknown
//! encoding go through [`decode_html`], which honours a byte-order mark,
//! then a charset declared in the document head, then falls back to UTF-8.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::{debug, warn};

/// Bytes of the document examined for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset=...>` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([A-Za-z0-9._:-]+)"#)
        .expect("META_CHARSET regex")
});

/// Returns the charset label declared in the head of `html`, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Picks the encoding for `html`: BOM first, then a declared charset
/// `encoding_rs` recognizes, then UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes `html` to a `String`, replacing malformed sequences with U+FFFD.
///
/// ```
/// use articleparse::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><body>na\xEFve</body>";
/// assert!(decode_html(html).contains("na\u{EF}ve"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    let (text, used, had_errors) = encoding.decode(html);
    debug!(encoding = used.name(), bytes = html.len(), "decoded html");
    if had_errors {
        warn!(encoding = used.name(), "html contained malformed byte sequences");
    }
    text.into_owned()
}
