use std::fmt;
use std::time::Duration;

use super::condition::ConditionKind;

/// Detailed result returned by
/// [`PathMatcher::evaluate_detailed()`](super::matcher::PathMatcher::evaluate_detailed).
///
/// Records the overall result, the conditions that ran (in evaluation order,
/// up to and including the first failure), the rejecting condition, and the
/// wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct MatchReport {
    matched: bool,
    evaluated: Vec<ConditionKind>,
    rejected_by: Option<ConditionKind>,
    duration: Duration,
}

impl MatchReport {
    pub(crate) fn new(
        evaluated: Vec<ConditionKind>,
        rejected_by: Option<ConditionKind>,
        duration: Duration,
    ) -> Self {
        Self {
            matched: rejected_by.is_none(),
            evaluated,
            rejected_by,
            duration,
        }
    }

    /// Same as [`PathMatcher::matches()`](super::matcher::PathMatcher::matches).
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Conditions that ran, in evaluation order.
    #[must_use]
    pub fn evaluated(&self) -> &[ConditionKind] {
        &self.evaluated
    }

    /// The condition that returned `false`, which stopped evaluation.
    #[must_use]
    pub fn rejected_by(&self) -> Option<ConditionKind> {
        self.rejected_by
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "matched")?;
        } else {
            write!(f, "rejected")?;
        }
        if let Some(kind) = self.rejected_by {
            write!(f, " by {kind}")?;
        }
        let names: Vec<&str> = self.evaluated.iter().map(|k| k.name()).collect();
        write!(f, ", evaluated: [{}]", names.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
