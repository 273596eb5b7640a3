//! Section segmentation.
//!
//! Splits normalized text on every bare open or close container tag. The
//! split is purely lexical: nested containers are flattened into separate,
//! independent fragments. Positions count every fragment, including the
//! ones dropped for being too short, so retained positions can have gaps.

use tracing::debug;

use crate::patterns::container_boundary;
use crate::section::Section;
use crate::stopwords::StopWords;

/// Splits `normalized` on `container_tag` boundaries, yielding each
/// fragment with its position.
pub fn split_fragments<'a>(
    normalized: &'a str,
    container_tag: &str,
) -> impl Iterator<Item = (usize, &'a str)> {
    let fragments: Vec<&'a str> = container_boundary(container_tag).split(normalized).collect();
    fragments.into_iter().enumerate()
}

/// Builds a [`Section`] for every fragment strictly longer than
/// `min_len` characters. Fragments of one character or less are always
/// dropped, whatever `min_len` is.
#[must_use]
pub fn segment(
    normalized: &str,
    container_tag: &str,
    min_len: usize,
    stop_words: &StopWords,
) -> Vec<Section> {
    let mut fragments = 0usize;
    let sections: Vec<Section> = split_fragments(normalized, container_tag)
        .inspect(|_| fragments += 1)
        .filter(|(_, fragment)| fragment.chars().count() > min_len.max(1))
        .map(|(position, fragment)| Section::new(fragment, position, stop_words))
        .collect();
    debug!(
        fragments,
        retained = sections.len(),
        min_len,
        "segmented document"
    );
    sections
}
