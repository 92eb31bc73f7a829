use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type for loading filter configuration.
///
/// Compilation itself never fails; this covers the surfaces that read
/// configuration from text: [`PathMatcher::from_dsl()`](crate::PathMatcher::from_dsl),
/// [`PathMatcher::from_file()`](crate::PathMatcher::from_file) and
/// `Config::from_json()`.
#[derive(Debug, Error)]
pub enum PathMatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_is_transparent() {
        let err: PathMatchError = ParseError::new("unexpected token").into();
        assert_eq!(err.to_string(), "parse error: unexpected token");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.filter");
        let err: PathMatchError = io.into();
        assert!(matches!(err, PathMatchError::Io(_)));
        assert_eq!(err.to_string(), "missing.filter");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_error_is_prefixed() {
        let err = crate::Config::from_json("{").unwrap_err();
        assert!(matches!(err, PathMatchError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON config: "));
    }
}
