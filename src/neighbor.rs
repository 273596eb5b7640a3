//! Ordering-aware scoring hook.
//!
//! Page layout carries boilerplate signal (navigation and footers cluster at
//! the edges), so the analyzer hands every section to a
//! [`NeighborClassifier`] along with the sections retained before and after
//! it. The result is added to the rule score before normalization. The
//! default, [`NoNeighborSignal`], contributes nothing.

use crate::rules::Score;
use crate::section::Section;

/// Extra scoring from a section's neighbours.
///
/// `previous` and `next` are `None` at the edges of the retained sequence.
/// The returned [`Score`] is added to the rule-based score.
pub trait NeighborClassifier: Send + Sync {
    fn classify(
        &self,
        current: &Section,
        previous: Option<&Section>,
        next: Option<&Section>,
    ) -> Score;
}

/// Adds nothing: `(0.0, 0.0)` for every section.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNeighborSignal;

impl NeighborClassifier for NoNeighborSignal {
    fn classify(
        &self,
        _current: &Section,
        _previous: Option<&Section>,
        _next: Option<&Section>,
    ) -> Score {
        Score::ZERO
    }
}

impl<F> NeighborClassifier for F
where
    F: Fn(&Section, Option<&Section>, Option<&Section>) -> Score + Send + Sync,
{
    fn classify(
        &self,
        current: &Section,
        previous: Option<&Section>,
        next: Option<&Section>,
    ) -> Score {
        self(current, previous, next)
    }
}
