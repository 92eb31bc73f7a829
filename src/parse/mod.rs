mod error;
mod grammar;
mod parser;

pub use error::ParseError;

use crate::Config;

/// Parse filter DSL input into a [`Config`].
///
/// ```text
/// # comments run to end of line
/// path:
///     caseInsensitive
///     startsWith "/devices/"
///     containsOneOf ["temp", "humidity"]
/// ```
///
/// Input without a `path:` header yields a config with no `path` section.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid DSL syntax, names an
/// unknown condition, gives a condition the wrong kind of value, or repeats
/// a condition.
pub fn parse(input: &str) -> Result<Config, ParseError> {
    use winnow::Parser;
    let section = grammar::parse_filter
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))?;
    parser::build_config(section)
}
