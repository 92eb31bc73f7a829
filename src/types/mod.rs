mod condition;
mod config;
mod match_report;
mod matcher;

pub use condition::{ConditionKind, UnknownCondition};
pub use config::{Config, PathConfig};
pub use match_report::MatchReport;
pub use matcher::PathMatcher;

pub(crate) use matcher::Condition;
