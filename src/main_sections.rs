//! Length-relative main-section selection.
//!
//! An alternative to probability scoring: the longest section anchors the
//! page, and other sections are kept when they are long enough relative to
//! it and link to roughly the same degree. Navigation blocks at the top and
//! bottom of a page are often long, but their anchor density sets them
//! apart from the article body.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Thresholds for [`select_main_sections`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainSectionCriteria {
    /// Minimum length as a percentage of the longest section (`50.0` keeps
    /// sections at least half as long).
    pub min_relative_len: f64,
    /// Largest allowed difference between a section's anchor density and the
    /// longest section's.
    pub max_anchor_delta: f64,
}

impl Default for MainSectionCriteria {
    fn default() -> Self {
        Self {
            min_relative_len: 5.0,
            max_anchor_delta: 0.1,
        }
    }
}

/// Returns the texts of the main sections, longest first.
///
/// Sections are visited from longest to shortest and the walk stops at the
/// first one under the length cut-off. Sections of equal length come out in
/// reverse document order.
#[must_use]
pub fn select_main_sections<'a>(
    sections: &'a [Section],
    criteria: &MainSectionCriteria,
) -> Vec<&'a str> {
    let mut by_len: Vec<&Section> = sections.iter().collect();
    by_len.sort_by_key(|s| s.len());
    by_len.reverse();

    let Some(base) = by_len.first() else {
        return Vec::new();
    };
    let base_len = base.len();
    let base_density = base.anchor_density();

    by_len
        .into_iter()
        .take_while(|s| {
            base_len == 0 || s.len() as f64 / base_len as f64 * 100.0 >= criteria.min_relative_len
        })
        .filter(|s| (base_density - s.anchor_density()).abs() < criteria.max_anchor_delta)
        .map(|s| s.text())
        .collect()
}
