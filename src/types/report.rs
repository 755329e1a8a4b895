use std::fmt;
use std::time::Duration;

use super::labels::LabelSet;
use super::miss::Miss;

/// Outcome of evaluating a [`RuleSet`](super::RuleSet) against one record,
/// returned by [`RuleSet::evaluate_detailed()`](super::RuleSet::evaluate_detailed).
///
/// Carries the derived labels, the per-rule misses in rule order, and the
/// wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct Evaluation {
    labels: LabelSet,
    misses: Vec<Miss>,
    duration: Duration,
}

impl Evaluation {
    pub(crate) fn new(labels: LabelSet, misses: Vec<Miss>, duration: Duration) -> Self {
        Self {
            labels,
            misses,
            duration,
        }
    }

    /// The derived labels, same as [`RuleSet::evaluate()`](super::RuleSet::evaluate).
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Consume the evaluation, keeping only the labels.
    pub fn into_labels(self) -> LabelSet {
        self.labels
    }

    /// Per-rule misses in rule order. Empty when every rule resolved or was
    /// filtered by its allow-list.
    #[must_use]
    pub fn misses(&self) -> &[Miss] {
        &self.misses
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "labels: [{}], misses: {}, duration: {:?}",
            self.labels,
            self.misses.len(),
            self.duration,
        )
    }
}
