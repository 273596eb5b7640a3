//! HTML entity decoding for a fixed set of common references.
//!
//! References outside the table are left in the text untouched.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Named references and their replacements.
const NAMED: &[(&str, &str)] = &[
    ("quot", "\""),
    ("apos", "'"),
    ("amp", "&"),
    ("lt", "<"),
    ("gt", ">"),
    ("nbsp", " "),
    ("copy", "Copyright"),
    ("mdash", "-"),
    ("ndash", "-"),
    ("rsquo", "'"),
    ("ldquo", "\""),
    ("rdquo", "\""),
    ("tab", " "),
    ("Eacute", "e"),
    ("eacute", "e"),
];

/// Decimal references and their replacements.
const NUMERIC: &[(u32, &str)] = &[
    (9, " "),
    (34, "\""),
    (38, "&"),
    (39, "'"),
    (60, "<"),
    (62, ">"),
    (160, " "),
    (169, "Copyright"),
    (201, "e"),
    (233, "e"),
    (8211, "-"),
    (8212, "-"),
    (8217, "'"),
    (8220, "\""),
    (8221, "\""),
];

static ENTITY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#(\d{1,10})|([A-Za-z]+));").expect("ENTITY_REF regex")
});

/// Looks up the replacement for a named reference such as `mdash`.
#[must_use]
pub fn lookup_named(name: &str) -> Option<&'static str> {
    NAMED.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Looks up the replacement for a decimal reference such as `8212`.
#[must_use]
pub fn lookup_numeric(code: u32) -> Option<&'static str> {
    NUMERIC.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}

/// Decodes the known entity references in `text` in a single pass.
///
/// Each reference is replaced at most once, so `&amp;lt;` becomes `&lt;`
/// rather than `<`. Numeric references may carry leading zeros
/// (`&#039;`).
///
/// # Examples
///
/// ```
/// use articleparse::entities::decode_entities;
///
/// assert_eq!(decode_entities("Tom &amp; Jerry &mdash; &hellip;"), "Tom & Jerry - &hellip;");
/// ```
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_REF
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(digits) = caps.get(1) {
                digits.as_str().parse::<u32>().ok().and_then(lookup_numeric)
            } else {
                caps.get(2).and_then(|name| lookup_named(name.as_str()))
            };
            decoded.map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}
