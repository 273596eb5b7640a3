//! Where the HTML comes from.
//!
//! Fetching over the network is left to the caller; this module covers
//! literal text, raw bytes and local files, and turns "nothing supplied"
//! into [`Error::NoInput`].

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::encoding;
use crate::error::{Error, Result};

/// One HTML input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    /// Already-decoded HTML text.
    Content(String),
    /// Raw bytes; the charset is sniffed before analysis.
    Bytes(Vec<u8>),
    /// A file on disk, read as bytes and decoded like [`HtmlSource::Bytes`].
    File(PathBuf),
}

impl HtmlSource {
    /// Picks the first supplied input, preferring content, then bytes, then
    /// a file.
    ///
    /// ```
    /// use articleparse::{Error, HtmlSource};
    ///
    /// let source = HtmlSource::resolve(None, None, Some("page.html".into()))?;
    /// assert!(matches!(source, HtmlSource::File(_)));
    ///
    /// assert!(matches!(HtmlSource::resolve(None, None, None), Err(Error::NoInput)));
    /// # Ok::<(), articleparse::Error>(())
    /// ```
    pub fn resolve(
        content: Option<String>,
        bytes: Option<Vec<u8>>,
        file: Option<PathBuf>,
    ) -> Result<Self> {
        content
            .map(HtmlSource::Content)
            .or_else(|| bytes.map(HtmlSource::Bytes))
            .or_else(|| file.map(HtmlSource::File))
            .ok_or(Error::NoInput)
    }

    /// Produces the HTML text.
    pub fn read(self) -> Result<String> {
        match self {
            HtmlSource::Content(html) => Ok(html),
            HtmlSource::Bytes(bytes) => Ok(encoding::decode_html(&bytes)),
            HtmlSource::File(path) => {
                let bytes = fs::read(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = bytes.len(), "read html file");
                Ok(encoding::decode_html(&bytes))
            }
        }
    }
}

impl From<String> for HtmlSource {
    fn from(html: String) -> Self {
        HtmlSource::Content(html)
    }
}

impl From<&str> for HtmlSource {
    fn from(html: &str) -> Self {
        HtmlSource::Content(html.to_string())
    }
}

impl From<Vec<u8>> for HtmlSource {
    fn from(bytes: Vec<u8>) -> Self {
        HtmlSource::Bytes(bytes)
    }
}

impl From<PathBuf> for HtmlSource {
    fn from(path: PathBuf) -> Self {
        HtmlSource::File(path)
    }
}
