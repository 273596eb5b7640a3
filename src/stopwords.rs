//! Stopword set used for stopword-density measurement.
//!
//! The built-in English list is built once per process and shared through an
//! `Arc`; custom sets can be supplied to the analyzer instead.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Common English function words.
const ENGLISH: &[&str] = &[
    "a", "about", "able", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "among", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could", "dear",
    "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got", "had",
    "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in", "into",
    "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might", "most",
    "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "say", "says", "she", "should", "since", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "tis", "to", "too", "twas", "us", "wants", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you", "your",
];

static ENGLISH_SET: LazyLock<Arc<StopWords>> =
    LazyLock::new(|| Arc::new(StopWords::from_words(ENGLISH.iter().copied())));

/// A read-only, case-insensitive set of stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// The shared built-in English set.
    #[must_use]
    pub fn english() -> Arc<Self> {
        Arc::clone(&ENGLISH_SET)
    }

    /// Returns `true` if `word` is a stopword, ignoring case.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
