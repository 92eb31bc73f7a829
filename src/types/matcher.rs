use std::fmt;

use super::condition::ConditionKind;
use super::config::Config;
use super::match_report::MatchReport;
use crate::generate::Test;

/// One compiled condition: its kind and the test built from its value.
pub(crate) struct Condition {
    pub(crate) kind: ConditionKind,
    pub(crate) test: Test,
}

impl Condition {
    pub(crate) fn new(kind: ConditionKind, test: Test) -> Self {
        Self { kind, test }
    }

    pub(crate) fn check(&self, path: &str) -> bool {
        (self.test)(path)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.kind).finish()
    }
}

#[derive(Debug)]
enum Body {
    /// Exactly one condition; checked directly.
    Single(Condition),
    /// Zero or more conditions, ANDed in evaluation order.
    All(Vec<Condition>),
}

/// A compiled path filter. Immutable, `Send + Sync`, designed to live behind `Arc`.
///
/// Built by [`compile()`](crate::compile). A matcher with no conditions accepts
/// every path.
///
/// # Case-insensitive matchers
///
/// When compiled from a `caseInsensitive` config, the matcher compares against
/// the lowercase form of a path. [`matches()`](Self::matches) lowercases on
/// every call; callers that already hold the lowercase form should use
/// [`matches_lowered()`](Self::matches_lowered).
///
/// ```
/// use pathmatch::{Config, PathConfig};
///
/// let config = Config::new(PathConfig::new().case_insensitive(true).starts_with("Foo"));
/// let matcher = pathmatch::compile(&config).unwrap();
/// assert!(matcher.matches_lowered("FOOBAR", "foobar"));
/// assert!(!matcher.matches_lowered("barfoo", "barfoo"));
/// ```
#[derive(Debug)]
pub struct PathMatcher {
    body: Body,
    case_insensitive: bool,
}

impl PathMatcher {
    pub(crate) fn new(conditions: Vec<Condition>, case_insensitive: bool) -> Self {
        let body = match <[Condition; 1]>::try_from(conditions) {
            Ok([only]) => Body::Single(only),
            Err(all) => Body::All(all),
        };
        Self {
            body,
            case_insensitive,
        }
    }

    /// Compile a config. Same as [`crate::compile`].
    #[must_use]
    pub fn compile(config: &Config) -> Option<Self> {
        crate::compile::compile(config)
    }

    /// Parse a filter DSL string and compile it.
    ///
    /// Returns `Ok(None)` when the input has no `path:` section.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError`](crate::PathMatchError) on parse failure.
    pub fn from_dsl(input: &str) -> Result<Option<Self>, crate::PathMatchError> {
        let config = crate::parse::parse(input)?;
        Ok(crate::compile::compile(&config))
    }

    /// Read a filter DSL file and compile it.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError`](crate::PathMatchError) on I/O or parse failure.
    pub fn from_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Option<Self>, crate::PathMatchError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    /// Check a path, lowercasing it first if the matcher is case-insensitive.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if self.case_insensitive {
            self.check(&crate::lowercase(path))
        } else {
            self.check(path)
        }
    }

    /// Check a path whose lowercase form the caller has already computed.
    ///
    /// Case-sensitive matchers test `path`; case-insensitive matchers test
    /// `lowered` and ignore `path`.
    #[must_use]
    pub fn matches_lowered(&self, path: &str, lowered: &str) -> bool {
        if self.case_insensitive {
            self.check(lowered)
        } else {
            self.check(path)
        }
    }

    fn check(&self, path: &str) -> bool {
        match &self.body {
            Body::Single(condition) => condition.check(path),
            Body::All(conditions) => crate::evaluate::all(conditions, path),
        }
    }

    /// Check a path and report which conditions ran and which one rejected it.
    ///
    /// Always walks the general composition loop, even for single-condition
    /// matchers, so the result doubles as a reference for [`matches()`](Self::matches).
    pub fn evaluate_detailed(&self, path: &str) -> MatchReport {
        if self.case_insensitive {
            let lowered = crate::lowercase(path);
            crate::evaluate::evaluate_detailed(self.condition_slice(), &lowered)
        } else {
            crate::evaluate::evaluate_detailed(self.condition_slice(), path)
        }
    }

    /// Detailed evaluation with a caller-supplied lowercase form.
    pub fn evaluate_detailed_lowered(&self, path: &str, lowered: &str) -> MatchReport {
        let subject = if self.case_insensitive { lowered } else { path };
        crate::evaluate::evaluate_detailed(self.condition_slice(), subject)
    }

    /// Condition kinds in evaluation order.
    #[must_use]
    pub fn conditions(&self) -> Vec<ConditionKind> {
        self.condition_slice().iter().map(|c| c.kind).collect()
    }

    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Number of compiled conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.condition_slice().len()
    }

    /// `true` if the matcher has no conditions and accepts every path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.condition_slice().is_empty()
    }

    /// `true` if the single-condition fast path is in use.
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self.body, Body::Single(_))
    }

    fn condition_slice(&self) -> &[Condition] {
        match &self.body {
            Body::Single(condition) => std::slice::from_ref(condition),
            Body::All(conditions) => conditions,
        }
    }
}
