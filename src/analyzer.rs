//! Pipeline orchestration: normalize, segment, extract features, score.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::neighbor::{NeighborClassifier, NoNeighborSignal};
use crate::normalizer;
use crate::options::Options;
use crate::rules;
use crate::section::Section;
use crate::segmenter;
use crate::stopwords::StopWords;

/// Content probability for one retained section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Fragment index of the section in document order.
    pub position: usize,
    /// Likelihood in `[0, 1]` that the section is main content.
    pub probability: f64,
    /// Section text with anchor tags removed.
    pub text: String,
}

/// Scores the sections of HTML documents.
///
/// An analyzer holds read-only configuration and can be reused (and shared
/// across threads) for any number of documents.
///
/// # Example
///
/// ```rust
/// use articleparse::{Analyzer, Options};
///
/// let prose = "The committee met on Tuesday to review the proposal and its budget. ".repeat(8);
/// let html = format!("<html><body><div>{prose}</div></body></html>");
///
/// let analyzer = Analyzer::new(Options { min_section_len: 20, ..Options::default() });
/// let results = analyzer.analyze(&html);
/// assert_eq!(results.len(), 1);
/// assert!(results[0].probability > 0.6);
/// ```
pub struct Analyzer {
    options: Options,
    stop_words: Arc<StopWords>,
    neighbor: Box<dyn NeighborClassifier>,
}

impl Analyzer {
    /// Creates an analyzer with the built-in English stopwords and no
    /// neighbour scoring.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            stop_words: StopWords::english(),
            neighbor: Box::new(NoNeighborSignal),
        }
    }

    /// Replaces the stopword set used for stopword density.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: Arc<StopWords>) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Installs an ordering-aware classifier whose score is added to the
    /// rule score of every section.
    #[must_use]
    pub fn with_neighbor_classifier(mut self, neighbor: impl NeighborClassifier + 'static) -> Self {
        self.neighbor = Box::new(neighbor);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Normalizes and segments `html` into sections, in document order.
    #[must_use]
    pub fn parse_sections(&self, html: &str) -> Vec<Section> {
        let normalized = normalizer::normalize(html, &self.options);
        segmenter::segment(
            &normalized,
            &self.options.container_tag,
            self.options.min_section_len,
            &self.stop_words,
        )
    }

    /// Scores already-parsed sections. Output order follows input order.
    #[must_use]
    pub fn analyze_sections(&self, sections: &[Section]) -> Vec<ScoreResult> {
        sections
            .iter()
            .enumerate()
            .map(|(i, current)| {
                let previous = i.checked_sub(1).and_then(|p| sections.get(p));
                let next = sections.get(i + 1);
                let score = rules::classify(current, &self.options.rules)
                    + self.neighbor.classify(current, previous, next);
                ScoreResult {
                    position: current.position(),
                    probability: score.probability(),
                    text: current.text().to_string(),
                }
            })
            .collect()
    }

    /// Runs the whole pipeline over `html`.
    ///
    /// Returns one result per retained section, sorted by position. A
    /// document without a body, or without any long enough section, gives
    /// an empty list.
    #[must_use]
    pub fn analyze(&self, html: &str) -> Vec<ScoreResult> {
        let sections = self.parse_sections(html);
        let results = self.analyze_sections(&sections);
        debug!(sections = results.len(), "analyzed document");
        results
    }

    /// Texts of the sections whose probability is at least `min_probability`.
    #[must_use]
    pub fn extract_content(&self, html: &str, min_probability: f64) -> Vec<String> {
        self.analyze(html)
            .into_iter()
            .filter(|r| r.probability >= min_probability)
            .map(|r| r.text)
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("options", &self.options)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}
