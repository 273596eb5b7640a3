//! Error types for articleparse.
//!
//! Analysis itself never fails: malformed markup degrades into empty or odd
//! sections. Errors only come from resolving the HTML source and from
//! loading or validating configuration.

use std::path::PathBuf;

/// Error type for source resolution and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No HTML source was supplied (no content, bytes, or file).
    #[error("no HTML source supplied: provide content, bytes, or a file")]
    NoInput,

    /// A file source could not be read.
    #[error("failed to read HTML from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A classification rule is internally inconsistent.
    #[error("invalid classification rule: {0}")]
    InvalidRule(String),

    /// Options failed validation for a reason other than a rule.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// An options document could not be parsed.
    #[error("failed to parse options: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for articleparse operations.
pub type Result<T> = std::result::Result<T, Error>;
