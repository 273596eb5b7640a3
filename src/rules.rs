//! Weighted feature rules and the per-section classifier.
//!
//! Each rule is worth one point. A feature value inside the rule's tolerance
//! band around a threshold earns half a point; otherwise the comparator
//! decides between a full point and nothing.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::section::{Feature, Section};

/// A rule threshold: a single value or a `[lo, hi]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Scalar(f64),
    Range(f64, f64),
}

/// How a feature value is compared against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    LessThan,
    GreaterThan,
    /// Strictly between the two bounds of a range threshold.
    BetweenExclusive,
}

impl Comparator {
    /// Applies the comparator. A scalar comparator given a range (or the
    /// reverse) never holds; [`ClassificationRule::validate`] rejects such rules.
    #[must_use]
    pub fn evaluate(self, value: f64, threshold: Threshold) -> bool {
        match (self, threshold) {
            (Comparator::LessThan, Threshold::Scalar(t)) => value < t,
            (Comparator::GreaterThan, Threshold::Scalar(t)) => value > t,
            (Comparator::BetweenExclusive, Threshold::Range(lo, hi)) => value > lo && value < hi,
            _ => false,
        }
    }
}

/// Returns `true` if `value` sits strictly inside the `margin` band around
/// the threshold.
///
/// For a range threshold each bound has its own band and landing in either
/// one counts. A margin of zero disables the band entirely.
///
/// ```
/// use articleparse::rules::{in_range, Threshold};
///
/// assert!(in_range(38.0, Threshold::Scalar(40.0), 0.10));
/// assert!(!in_range(35.0, Threshold::Scalar(40.0), 0.10));
/// assert!(in_range(0.30, Threshold::Range(0.30, 0.566), 0.02));
/// ```
#[must_use]
pub fn in_range(value: f64, threshold: Threshold, margin: f64) -> bool {
    if margin == 0.0 {
        return false;
    }
    let near = |t: f64| value > t - t * margin && value < t + t * margin;
    match threshold {
        Threshold::Scalar(t) => near(t),
        Threshold::Range(lo, hi) => near(lo) || near(hi),
    }
}

/// One feature rule: threshold, comparator and tolerance margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub feature: Feature,
    pub threshold: Threshold,
    pub comparator: Comparator,
    /// Fractional tolerance band for partial credit; `0.0` disables it.
    #[serde(default)]
    pub margin: f64,
}

impl ClassificationRule {
    #[must_use]
    pub fn new(
        feature: Feature,
        threshold: Threshold,
        comparator: Comparator,
        margin: f64,
    ) -> Self {
        Self {
            feature,
            threshold,
            comparator,
            margin,
        }
    }

    /// Scores one feature value: 0.5 inside the margin band, otherwise 1.0
    /// when the comparator holds and 0.0 when it does not.
    #[must_use]
    pub fn score(&self, value: f64) -> f64 {
        if in_range(value, self.threshold, self.margin) {
            0.5
        } else if self.comparator.evaluate(value, self.threshold) {
            1.0
        } else {
            0.0
        }
    }

    /// Checks that the comparator and threshold shapes agree and that all
    /// numbers are finite.
    pub fn validate(&self) -> Result<()> {
        let feature = self.feature;
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::InvalidRule(format!(
                "{feature:?}: margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        match (self.comparator, self.threshold) {
            (Comparator::LessThan | Comparator::GreaterThan, Threshold::Scalar(t)) => {
                if !t.is_finite() {
                    return Err(Error::InvalidRule(format!(
                        "{feature:?}: threshold must be finite"
                    )));
                }
            }
            (Comparator::BetweenExclusive, Threshold::Range(lo, hi)) => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Err(Error::InvalidRule(format!(
                        "{feature:?}: range bounds must be finite"
                    )));
                }
                if lo > hi {
                    return Err(Error::InvalidRule(format!(
                        "{feature:?}: range lower bound {lo} exceeds upper bound {hi}"
                    )));
                }
            }
            (Comparator::BetweenExclusive, Threshold::Scalar(_)) => {
                return Err(Error::InvalidRule(format!(
                    "{feature:?}: between_exclusive needs a [lo, hi] threshold"
                )));
            }
            (comparator, Threshold::Range(..)) => {
                return Err(Error::InvalidRule(format!(
                    "{feature:?}: {comparator:?} needs a scalar threshold"
                )));
            }
        }
        Ok(())
    }
}

/// The rule set applied to every section in one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<ClassificationRule>);

impl RuleSet {
    #[must_use]
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self(rules)
    }

    /// A rule set with no rules; every section scores zero out of zero.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassificationRule> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        self.0.iter().try_for_each(ClassificationRule::validate)
    }
}

impl Default for RuleSet {
    /// Anchor density below a third, more than forty words, and stopword
    /// density between 0.30 and 0.566.
    fn default() -> Self {
        Self(vec![
            ClassificationRule::new(
                Feature::AnchorDensity,
                Threshold::Scalar(0.333),
                Comparator::LessThan,
                0.10,
            ),
            ClassificationRule::new(
                Feature::WordCount,
                Threshold::Scalar(40.0),
                Comparator::GreaterThan,
                0.10,
            ),
            ClassificationRule::new(
                Feature::StopWordDensity,
                Threshold::Range(0.30, 0.566),
                Comparator::BetweenExclusive,
                0.02,
            ),
        ])
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a ClassificationRule;
    type IntoIter = std::slice::Iter<'a, ClassificationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ClassificationRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = ClassificationRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Points earned out of points possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Score {
    pub score: f64,
    pub points_possible: f64,
}

impl Score {
    pub const ZERO: Score = Score {
        score: 0.0,
        points_possible: 0.0,
    };

    #[must_use]
    pub fn new(score: f64, points_possible: f64) -> Self {
        Self {
            score,
            points_possible,
        }
    }

    /// Normalized score in `[0, 1]`; zero when nothing was possible.
    #[must_use]
    pub fn probability(self) -> f64 {
        if self.points_possible > 0.0 {
            (self.score / self.points_possible).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score::new(
            self.score + rhs.score,
            self.points_possible + rhs.points_possible,
        )
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

/// Scores a section against every rule in `rules`.
#[must_use]
pub fn classify(section: &Section, rules: &RuleSet) -> Score {
    rules.iter().fold(Score::ZERO, |acc, rule| {
        acc + Score::new(rule.score(section.feature(rule.feature)), 1.0)
    })
}
