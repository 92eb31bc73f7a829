use crate::{ConditionKind, Config, PathConfig};

use super::ParseError;

const CASE_INSENSITIVE: &str = "caseInsensitive";

/// A syntactic `name value` entry of a `path:` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub(crate) name: String,
    pub(crate) value: RawValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValue {
    /// Name with no value.
    Flag,
    Str(String),
    List(Vec<String>),
}

/// Check entry names, value shapes, and duplicates, producing a [`Config`].
pub(crate) fn build_config(section: Option<Vec<RawEntry>>) -> Result<Config, ParseError> {
    let Some(entries) = section else {
        return Ok(Config::without_path());
    };

    let mut path = PathConfig::new();
    let mut saw_case_flag = false;

    for RawEntry { name, value } in entries {
        if name == CASE_INSENSITIVE {
            if saw_case_flag {
                return Err(ParseError::new(format!("duplicate '{CASE_INSENSITIVE}'")));
            }
            if value != RawValue::Flag {
                return Err(ParseError::new(format!(
                    "'{CASE_INSENSITIVE}' takes no value"
                )));
            }
            saw_case_flag = true;
            path.case_insensitive = true;
            continue;
        }

        let kind: ConditionKind = name
            .parse()
            .map_err(|e: crate::UnknownCondition| ParseError::new(e.to_string()))?;
        if path.is_set(kind) {
            return Err(ParseError::new(format!("duplicate condition '{kind}'")));
        }

        match value {
            RawValue::Flag => {
                return Err(ParseError::new(format!(
                    "condition '{kind}' requires a value"
                )));
            }
            RawValue::Str(s) => match path.single_slot(kind) {
                Some(slot) => *slot = Some(s),
                None => {
                    return Err(ParseError::new(format!(
                        "condition '{kind}' expects a list of strings"
                    )));
                }
            },
            RawValue::List(items) => match path.list_slot(kind) {
                Some(slot) => *slot = Some(items),
                None => {
                    return Err(ParseError::new(format!(
                        "condition '{kind}' expects a single string"
                    )));
                }
            },
        }
    }

    Ok(Config::new(path))
}
