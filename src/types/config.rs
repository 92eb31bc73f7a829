use super::condition::ConditionKind;

/// Top-level filter configuration.
///
/// Only the `path` section is consulted by the matcher compiler. A config
/// without a `path` section compiles to no matcher at all, which is distinct
/// from an empty `path` section (a matcher that accepts every path).
///
/// # Example
///
/// ```
/// use pathmatch::{Config, PathConfig};
///
/// let config = Config::new(
///     PathConfig::new()
///         .starts_with("/devices/")
///         .contains_one_of(["temp", "humidity"]),
/// );
/// let matcher = pathmatch::compile(&config).unwrap();
/// assert!(matcher.matches("/devices/kitchen/temp"));
/// assert!(!matcher.matches("/devices/kitchen/door"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub path: Option<PathConfig>,
}

impl Config {
    /// A config with the given `path` section.
    #[must_use]
    pub fn new(path: PathConfig) -> Self {
        Self { path: Some(path) }
    }

    /// A config with no `path` section.
    #[must_use]
    pub fn without_path() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration object. Keys other than `path` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError::Json`](crate::PathMatchError::Json) if the
    /// input is not valid JSON or a condition has the wrong value shape.
    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> Result<Self, crate::PathMatchError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// The `path` section: a set of string conditions plus the case flag.
///
/// Setters keep the last value when a condition is set twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PathConfig {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_false")
    )]
    pub case_insensitive: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub equals: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub equals_not: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contains: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contains_not: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contains_all_of: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub contains_one_of: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub starts_with: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub starts_not_with: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ends_with: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ends_not_with: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub equals_one_of: Option<Vec<String>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub equals_not_one_of: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn owned_list<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl PathConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match case-insensitively. Configured values are lowercased at compile
    /// time and paths must be checked in lowercase form.
    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    #[must_use]
    pub fn equals(mut self, value: impl Into<String>) -> Self {
        self.equals = Some(value.into());
        self
    }

    #[must_use]
    pub fn equals_not(mut self, value: impl Into<String>) -> Self {
        self.equals_not = Some(value.into());
        self
    }

    #[must_use]
    pub fn contains(mut self, value: impl Into<String>) -> Self {
        self.contains = Some(value.into());
        self
    }

    #[must_use]
    pub fn contains_not(mut self, value: impl Into<String>) -> Self {
        self.contains_not = Some(value.into());
        self
    }

    #[must_use]
    pub fn contains_all_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_all_of = Some(owned_list(values));
        self
    }

    #[must_use]
    pub fn contains_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_one_of = Some(owned_list(values));
        self
    }

    #[must_use]
    pub fn starts_with(mut self, value: impl Into<String>) -> Self {
        self.starts_with = Some(value.into());
        self
    }

    #[must_use]
    pub fn starts_not_with(mut self, value: impl Into<String>) -> Self {
        self.starts_not_with = Some(value.into());
        self
    }

    #[must_use]
    pub fn ends_with(mut self, value: impl Into<String>) -> Self {
        self.ends_with = Some(value.into());
        self
    }

    #[must_use]
    pub fn ends_not_with(mut self, value: impl Into<String>) -> Self {
        self.ends_not_with = Some(value.into());
        self
    }

    #[must_use]
    pub fn equals_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equals_one_of = Some(owned_list(values));
        self
    }

    #[must_use]
    pub fn equals_not_one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equals_not_one_of = Some(owned_list(values));
        self
    }

    /// Whether the given condition is present.
    #[must_use]
    pub fn is_set(&self, kind: ConditionKind) -> bool {
        match kind {
            ConditionKind::Equals => self.equals.is_some(),
            ConditionKind::EqualsNot => self.equals_not.is_some(),
            ConditionKind::EndsWith => self.ends_with.is_some(),
            ConditionKind::StartsWith => self.starts_with.is_some(),
            ConditionKind::Contains => self.contains.is_some(),
            ConditionKind::ContainsNot => self.contains_not.is_some(),
            ConditionKind::ContainsAllOf => self.contains_all_of.is_some(),
            ConditionKind::ContainsOneOf => self.contains_one_of.is_some(),
            ConditionKind::StartsNotWith => self.starts_not_with.is_some(),
            ConditionKind::EndsNotWith => self.ends_not_with.is_some(),
            ConditionKind::EqualsOneOf => self.equals_one_of.is_some(),
            ConditionKind::EqualsNotOneOf => self.equals_not_one_of.is_some(),
        }
    }

    /// Present conditions, in evaluation order.
    #[must_use]
    pub fn conditions(&self) -> Vec<ConditionKind> {
        ConditionKind::EVALUATION_ORDER
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .collect()
    }

    /// Storage for a string-valued condition; `None` for list-valued kinds.
    pub(crate) fn single_slot(&mut self, kind: ConditionKind) -> Option<&mut Option<String>> {
        match kind {
            ConditionKind::Equals => Some(&mut self.equals),
            ConditionKind::EqualsNot => Some(&mut self.equals_not),
            ConditionKind::EndsWith => Some(&mut self.ends_with),
            ConditionKind::StartsWith => Some(&mut self.starts_with),
            ConditionKind::Contains => Some(&mut self.contains),
            ConditionKind::ContainsNot => Some(&mut self.contains_not),
            ConditionKind::StartsNotWith => Some(&mut self.starts_not_with),
            ConditionKind::EndsNotWith => Some(&mut self.ends_not_with),
            ConditionKind::ContainsAllOf
            | ConditionKind::ContainsOneOf
            | ConditionKind::EqualsOneOf
            | ConditionKind::EqualsNotOneOf => None,
        }
    }

    /// Storage for a list-valued condition; `None` for string-valued kinds.
    pub(crate) fn list_slot(&mut self, kind: ConditionKind) -> Option<&mut Option<Vec<String>>> {
        match kind {
            ConditionKind::ContainsAllOf => Some(&mut self.contains_all_of),
            ConditionKind::ContainsOneOf => Some(&mut self.contains_one_of),
            ConditionKind::EqualsOneOf => Some(&mut self.equals_one_of),
            ConditionKind::EqualsNotOneOf => Some(&mut self.equals_not_one_of),
            _ => None,
        }
    }
}
