use std::time::Instant;

use crate::types::{Condition, MatchReport};

/// AND over `conditions` in order, stopping at the first `false`.
pub(crate) fn all(conditions: &[Condition], path: &str) -> bool {
    for condition in conditions {
        if !condition.check(path) {
            return false;
        }
    }
    true
}

pub(crate) fn evaluate_detailed(conditions: &[Condition], path: &str) -> MatchReport {
    let start = Instant::now();
    let mut evaluated = Vec::with_capacity(conditions.len());
    let mut rejected_by = None;

    for condition in conditions {
        evaluated.push(condition.kind);
        if !condition.check(path) {
            rejected_by = Some(condition.kind);
            break;
        }
    }

    MatchReport::new(evaluated, rejected_by, start.elapsed())
}
