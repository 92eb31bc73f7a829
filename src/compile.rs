use tracing::{debug, trace};

use crate::generate::{
    contains, contains_all_of, contains_one_of, ends_with, equals, equals_one_of, negate,
    starts_with, Test,
};
use crate::types::Condition;
use crate::{ConditionKind, Config, PathConfig, PathMatcher};

/// Compile a config into a [`PathMatcher`].
///
/// Returns `None` when the config has no `path` section, so callers can tell
/// "no filter configured" apart from "filter that accepts everything".
/// The config is only read; case-insensitive values are lowercased into the
/// matcher's own storage.
///
/// # Example
///
/// ```
/// use pathmatch::{Config, PathConfig};
///
/// let config = Config::new(PathConfig::new().contains("a").ends_with("z"));
/// let matcher = pathmatch::compile(&config).unwrap();
/// assert!(matcher.matches("az"));
/// assert!(!matcher.matches("za"));
/// assert!(!matcher.matches("bz"));
///
/// assert!(pathmatch::compile(&Config::without_path()).is_none());
/// ```
#[must_use]
pub fn compile(config: &Config) -> Option<PathMatcher> {
    let Some(path) = config.path.as_ref() else {
        trace!("no path section configured, skipping matcher");
        return None;
    };

    let case_insensitive = path.case_insensitive;
    let conditions: Vec<Condition> = ConditionKind::EVALUATION_ORDER
        .into_iter()
        .filter_map(|kind| build(kind, path).map(|test| Condition::new(kind, test)))
        .collect();

    debug!(
        conditions = conditions.len(),
        case_insensitive, "compiled path matcher"
    );

    Some(PathMatcher::new(conditions, case_insensitive))
}

/// Lowercase a path the same way case-insensitive configs are lowercased.
#[must_use]
pub fn lowercase(path: &str) -> String {
    path.to_lowercase()
}

fn fold(value: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        lowercase(value)
    } else {
        value.to_owned()
    }
}

fn single(value: Option<&str>, case_insensitive: bool) -> Option<String> {
    value.map(|v| fold(v, case_insensitive))
}

fn list(values: Option<&[String]>, case_insensitive: bool) -> Option<Vec<String>> {
    values.map(|vs| vs.iter().map(|v| fold(v, case_insensitive)).collect())
}

fn build(kind: ConditionKind, path: &PathConfig) -> Option<Test> {
    let ci = path.case_insensitive;
    match kind {
        ConditionKind::Equals => single(path.equals.as_deref(), ci).map(equals),
        ConditionKind::EqualsNot => single(path.equals_not.as_deref(), ci).map(negate(equals)),
        ConditionKind::EndsWith => single(path.ends_with.as_deref(), ci).map(ends_with),
        ConditionKind::StartsWith => single(path.starts_with.as_deref(), ci).map(starts_with),
        ConditionKind::Contains => single(path.contains.as_deref(), ci).map(contains),
        ConditionKind::ContainsNot => {
            single(path.contains_not.as_deref(), ci).map(negate(contains))
        }
        ConditionKind::ContainsAllOf => {
            list(path.contains_all_of.as_deref(), ci).map(contains_all_of)
        }
        ConditionKind::ContainsOneOf => {
            list(path.contains_one_of.as_deref(), ci).map(contains_one_of)
        }
        ConditionKind::StartsNotWith => {
            single(path.starts_not_with.as_deref(), ci).map(negate(starts_with))
        }
        ConditionKind::EndsNotWith => {
            single(path.ends_not_with.as_deref(), ci).map(negate(ends_with))
        }
        ConditionKind::EqualsOneOf => list(path.equals_one_of.as_deref(), ci).map(equals_one_of),
        ConditionKind::EqualsNotOneOf => {
            list(path.equals_not_one_of.as_deref(), ci).map(negate(equals_one_of))
        }
    }
}
