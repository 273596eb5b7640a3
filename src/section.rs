//! Per-section feature extraction.
//!
//! A [`Section`] is built once from a raw fragment (anchor tags still in
//! place) and its position, and never changes afterwards. Every ratio guards
//! its denominator and falls back to zero.

use serde::{Deserialize, Serialize};

use crate::patterns::{ANCHOR_PAIR, ANCHOR_TAG, PUNCTUATION, SENTENCE_TERMINATOR};
use crate::stopwords::StopWords;

/// The measurable features of a section, addressable by classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Length,
    AnchorCount,
    AnchorDensity,
    WordCount,
    AvgWordLen,
    UpperCount,
    StopWordDensity,
    SentenceCount,
    AvgSentenceLen,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 9] = [
        Feature::Length,
        Feature::AnchorCount,
        Feature::AnchorDensity,
        Feature::WordCount,
        Feature::AvgWordLen,
        Feature::UpperCount,
        Feature::StopWordDensity,
        Feature::SentenceCount,
        Feature::AvgSentenceLen,
    ];
}

/// One candidate content block with its derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    position: usize,
    text: String,
    length: usize,
    anchor_count: usize,
    anchor_density: f64,
    word_count: usize,
    avg_word_len: f64,
    upper_count: usize,
    stop_word_density: f64,
    sentence_count: usize,
    avg_sentence_len: f64,
}

impl Section {
    /// Analyzes a raw fragment found at `position` in the segmented document.
    #[must_use]
    pub fn new(fragment: &str, position: usize, stop_words: &StopWords) -> Self {
        let anchors = AnchorStats::measure(fragment);
        let length = anchors.text.chars().count();
        let anchor_density = ratio(anchors.text_len, length);

        let words = WordStats::measure(&anchors.text, stop_words);
        let sentences = SentenceStats::measure(&anchors.text);

        Self {
            position,
            length,
            anchor_count: anchors.count,
            anchor_density,
            word_count: words.count,
            avg_word_len: words.avg_len,
            upper_count: words.upper_count,
            stop_word_density: words.stop_word_density,
            sentence_count: sentences.count,
            avg_sentence_len: sentences.avg_len,
            text: anchors.text,
        }
    }

    /// Index of the fragment in document order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Section text with anchor tags removed and anchor text kept.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of [`Section::text`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[must_use]
    pub fn anchor_count(&self) -> usize {
        self.anchor_count
    }

    /// Fraction of the text that is link text.
    #[must_use]
    pub fn anchor_density(&self) -> f64 {
        self.anchor_density
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn avg_word_len(&self) -> f64 {
        self.avg_word_len
    }

    /// Number of words starting with an uppercase letter.
    #[must_use]
    pub fn upper_count(&self) -> usize {
        self.upper_count
    }

    #[must_use]
    pub fn stop_word_density(&self) -> f64 {
        self.stop_word_density
    }

    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Mean sentence length in characters.
    #[must_use]
    pub fn avg_sentence_len(&self) -> f64 {
        self.avg_sentence_len
    }

    /// Reads a feature as a float for rule evaluation.
    #[must_use]
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Length => self.length as f64,
            Feature::AnchorCount => self.anchor_count as f64,
            Feature::AnchorDensity => self.anchor_density,
            Feature::WordCount => self.word_count as f64,
            Feature::AvgWordLen => self.avg_word_len,
            Feature::UpperCount => self.upper_count as f64,
            Feature::StopWordDensity => self.stop_word_density,
            Feature::SentenceCount => self.sentence_count as f64,
            Feature::AvgSentenceLen => self.avg_sentence_len,
        }
    }

    /// Consumes the section, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

struct AnchorStats {
    count: usize,
    text_len: usize,
    text: String,
}

impl AnchorStats {
    fn measure(fragment: &str) -> Self {
        // Unclosed anchors leave nested tags inside a capture. Those count as
        // the single space they become in `text`.
        let (count, text_len) = ANCHOR_PAIR
            .captures_iter(fragment)
            .filter_map(|caps| caps.get(1))
            .fold((0, 0), |(count, len), m| {
                let link_text = ANCHOR_TAG.replace_all(m.as_str(), " ");
                (count + 1, len + link_text.chars().count())
            });

        // Tags become spaces so link text never fuses with its neighbours.
        let text = ANCHOR_TAG.replace_all(fragment, " ").into_owned();

        Self {
            count,
            text_len,
            text,
        }
    }
}

struct WordStats {
    count: usize,
    avg_len: f64,
    upper_count: usize,
    stop_word_density: f64,
}

impl WordStats {
    fn measure(text: &str, stop_words: &StopWords) -> Self {
        let stripped = PUNCTUATION.replace_all(text, "");

        let mut count = 0;
        let mut total_len = 0;
        let mut upper_count = 0;
        let mut stop_count = 0;
        for word in stripped.split_whitespace() {
            count += 1;
            total_len += word.chars().count();
            if word.chars().next().is_some_and(char::is_uppercase) {
                upper_count += 1;
            }
            if stop_words.is_stop_word(word) {
                stop_count += 1;
            }
        }

        Self {
            count,
            avg_len: ratio(total_len, count),
            upper_count,
            stop_word_density: ratio(stop_count, count),
        }
    }
}

struct SentenceStats {
    count: usize,
    avg_len: f64,
}

impl SentenceStats {
    fn measure(text: &str) -> Self {
        let folded = SENTENCE_TERMINATOR.replace_all(text, ".");
        let (count, total_len) = folded
            .split(". ")
            .fold((0, 0), |(count, len), s| (count + 1, len + s.chars().count()));

        Self {
            count,
            avg_len: ratio(total_len, count),
        }
    }
}
