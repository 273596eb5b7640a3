//! # articleparse
//!
//! Heuristic main-content extraction from HTML articles.
//!
//! A document is reduced to flat text with only container and anchor tags
//! left, split into sections at container boundaries, and each section is
//! scored against a small set of weighted feature rules (link density, word
//! count, stopword density). The result is every section with a probability
//! of being article content, in document order.
//!
//! ## Quick Start
//!
//! ```rust
//! use articleparse::{analyze_with_options, Options};
//!
//! let prose = "Rain is expected over the weekend as a front moves in from the west. ".repeat(6);
//! let html = format!(
//!     "<html><body><div><a href='/'>Home</a> <a href='/news'>News</a></div><div>{prose}</div></body></html>"
//! );
//!
//! let options = Options { min_section_len: 20, ..Options::default() };
//! let results = analyze_with_options(&html, &options);
//! assert_eq!(results.len(), 2);
//! assert!(results[1].probability > results[0].probability);
//! ```
//!
//! ## Pipeline
//!
//! - [`normalizer`]: strips scripts, styles, comments and all but the retained tags
//! - [`segmenter`]: splits on container tags and drops short fragments
//! - [`section`]: anchor, word and sentence statistics per fragment
//! - [`rules`]: weighted rules with tolerance bands produce a probability
//! - [`neighbor`]: ordering-aware scoring hook, a no-op by default

mod analyzer;
mod error;
mod options;
mod patterns;
mod source;

/// Fixed-table HTML entity decoding.
pub mod entities;

/// Built-in and custom stopword sets.
pub mod stopwords;

/// Markup normalization pipeline.
pub mod normalizer;

/// Splitting normalized text into sections.
pub mod segmenter;

/// Per-section feature extraction.
pub mod section;

/// Classification rules and scoring.
pub mod rules;

/// Ordering-aware scoring extension point.
pub mod neighbor;

/// Length-relative main-section selection.
pub mod main_sections;

/// Character encoding detection for raw HTML bytes.
pub mod encoding;

// Public API - re-exports
pub use analyzer::{Analyzer, ScoreResult};
pub use error::{Error, Result};
pub use options::Options;
pub use section::{Feature, Section};
pub use source::HtmlSource;

/// Scores the sections of `html` using default options.
#[must_use]
pub fn analyze(html: &str) -> Vec<ScoreResult> {
    analyze_with_options(html, &Options::default())
}

/// Scores the sections of `html` using `options`.
///
/// Options are used as given; call [`Options::validate`] first when they
/// come from an untrusted source.
#[must_use]
pub fn analyze_with_options(html: &str, options: &Options) -> Vec<ScoreResult> {
    Analyzer::new(options.clone()).analyze(html)
}

/// Scores the sections of raw HTML bytes, detecting the character encoding
/// from a byte-order mark or `<meta>` charset declaration.
///
/// ```rust
/// use articleparse::{analyze_bytes, Options};
///
/// let html = b"<meta charset=\"windows-1252\"><body><div>Caf\xE9 society</div></body>";
/// let options = Options { min_section_len: 5, ..Options::default() };
/// let results = analyze_bytes(html, &options);
/// assert_eq!(results[0].text, "Caf\u{e9} society");
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8], options: &Options) -> Vec<ScoreResult> {
    analyze_with_options(&encoding::decode_html(html), options)
}

/// Reads `source` and scores its sections.
///
/// Fails only if the source cannot be read; the analysis itself never fails.
pub fn analyze_source(source: HtmlSource, options: &Options) -> Result<Vec<ScoreResult>> {
    let html = source.read()?;
    Ok(analyze_with_options(&html, options))
}
