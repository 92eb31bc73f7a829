use std::fmt;
use std::str::FromStr;

/// The named string conditions a path filter can combine.
///
/// Each kind maps to one configuration key (see [`name()`](Self::name)). Kinds
/// ending in `Not`/`NotOneOf` are the exact complements of their positive
/// counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConditionKind {
    Equals,
    EqualsNot,
    EndsWith,
    StartsWith,
    Contains,
    ContainsNot,
    ContainsAllOf,
    ContainsOneOf,
    StartsNotWith,
    EndsNotWith,
    EqualsOneOf,
    EqualsNotOneOf,
}

impl ConditionKind {
    /// The order in which present conditions are evaluated, independent of
    /// the order they were configured in.
    pub const EVALUATION_ORDER: [ConditionKind; 12] = [
        ConditionKind::Equals,
        ConditionKind::EqualsNot,
        ConditionKind::EndsWith,
        ConditionKind::StartsWith,
        ConditionKind::Contains,
        ConditionKind::ContainsNot,
        ConditionKind::ContainsAllOf,
        ConditionKind::ContainsOneOf,
        ConditionKind::StartsNotWith,
        ConditionKind::EndsNotWith,
        ConditionKind::EqualsOneOf,
        ConditionKind::EqualsNotOneOf,
    ];

    /// Configuration key for this condition, e.g. `"startsNotWith"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConditionKind::Equals => "equals",
            ConditionKind::EqualsNot => "equalsNot",
            ConditionKind::EndsWith => "endsWith",
            ConditionKind::StartsWith => "startsWith",
            ConditionKind::Contains => "contains",
            ConditionKind::ContainsNot => "containsNot",
            ConditionKind::ContainsAllOf => "containsAllOf",
            ConditionKind::ContainsOneOf => "containsOneOf",
            ConditionKind::StartsNotWith => "startsNotWith",
            ConditionKind::EndsNotWith => "endsNotWith",
            ConditionKind::EqualsOneOf => "equalsOneOf",
            ConditionKind::EqualsNotOneOf => "equalsNotOneOf",
        }
    }

    /// Whether the condition is configured with a sequence of strings rather
    /// than a single string.
    #[must_use]
    pub fn takes_list(self) -> bool {
        matches!(
            self,
            ConditionKind::ContainsAllOf
                | ConditionKind::ContainsOneOf
                | ConditionKind::EqualsOneOf
                | ConditionKind::EqualsNotOneOf
        )
    }

    /// Whether this kind is derived by negating a positive condition.
    #[must_use]
    pub fn is_negated(self) -> bool {
        matches!(
            self,
            ConditionKind::EqualsNot
                | ConditionKind::ContainsNot
                | ConditionKind::StartsNotWith
                | ConditionKind::EndsNotWith
                | ConditionKind::EqualsNotOneOf
        )
    }

    /// The kind whose test is the logical complement of this one, if any.
    ///
    /// `containsAllOf` and `containsOneOf` have no complement.
    #[must_use]
    pub fn complement(self) -> Option<ConditionKind> {
        match self {
            ConditionKind::Equals => Some(ConditionKind::EqualsNot),
            ConditionKind::EqualsNot => Some(ConditionKind::Equals),
            ConditionKind::Contains => Some(ConditionKind::ContainsNot),
            ConditionKind::ContainsNot => Some(ConditionKind::Contains),
            ConditionKind::StartsWith => Some(ConditionKind::StartsNotWith),
            ConditionKind::StartsNotWith => Some(ConditionKind::StartsWith),
            ConditionKind::EndsWith => Some(ConditionKind::EndsNotWith),
            ConditionKind::EndsNotWith => Some(ConditionKind::EndsWith),
            ConditionKind::EqualsOneOf => Some(ConditionKind::EqualsNotOneOf),
            ConditionKind::EqualsNotOneOf => Some(ConditionKind::EqualsOneOf),
            ConditionKind::ContainsAllOf | ConditionKind::ContainsOneOf => None,
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl fmt::Display for UnknownCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown path condition '{}'", self.0)
    }
}

impl std::error::Error for UnknownCondition {}

impl FromStr for ConditionKind {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionKind::EVALUATION_ORDER
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownCondition(s.to_owned()))
    }
}
