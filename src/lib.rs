//! Compile declarative path filters into fast, reusable predicates.
//!
//! A filter is a set of named string conditions (`equals`, `startsWith`,
//! `containsOneOf`, ...) over a hierarchical path. [`compile()`] turns a
//! [`Config`] into an immutable [`PathMatcher`] that ANDs the present
//! conditions in a fixed order and stops at the first failure.
//!
//! ```
//! use pathmatch::{Config, PathConfig};
//!
//! let config = Config::new(PathConfig::new().starts_with("/devices/").ends_not_with("/raw"));
//! let matcher = pathmatch::compile(&config).unwrap();
//!
//! assert!(matcher.matches("/devices/kitchen/temp"));
//! assert!(!matcher.matches("/devices/kitchen/raw"));
//! ```
//!
//! Configs can also be read from JSON (feature `serde`) or from the filter
//! DSL, see [`parse::parse`].

mod compile;
mod error;
mod evaluate;
mod generate;
pub mod parse;
mod types;

pub use compile::{compile, lowercase};
pub use error::PathMatchError;
pub use types::{
    ConditionKind, Config, MatchReport, PathConfig, PathMatcher, UnknownCondition,
};
