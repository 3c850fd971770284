//! Error types for parsing, serialization and typed deserialization.
//!
//! Tokenizing and value coercion are total, and the default lenient parser
//! never fails. Errors come from three places:
//!
//! - **Strict parsing**: [`ParseOptions::strict`](crate::ParseOptions::strict)
//!   turns silent recoveries into diagnostics with line/column information
//! - **Typed deserialization**: a parsed document does not fit the target type
//! - **I/O**: reading input or writing JSON output fails
//!
//! ## Examples
//!
//! ```rust
//! use lightconf::{parse_with_options, Error, ParseOptions};
//!
//! let result = parse_with_options("fixture {\n  channel: 5\n", &ParseOptions::strict());
//! assert!(matches!(result, Err(Error::UnterminatedBlock { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A block opened with `{` was never closed by `}` or `;`
    #[error("Unterminated block '{key}' opened at line {line}, column {col}")]
    UnterminatedBlock { line: usize, col: usize, key: String },

    /// A key was not followed by `:` and a value, or by `{`
    #[error("Missing value for key '{key}' at line {line}, column {col}")]
    MissingValue { line: usize, col: usize, key: String },

    /// A token appeared where the grammar does not allow it
    #[error("Unexpected token '{found}' at line {line}, column {col}: expected {expected}")]
    UnexpectedToken {
        line: usize,
        col: usize,
        found: String,
        expected: String,
    },

    /// The same key was written twice in one block
    #[error("Duplicate key '{key}' at line {line}, column {col}")]
    DuplicateKey { line: usize, col: usize, key: String },

    /// Nesting went deeper than the configured limit
    #[error("Nesting depth limit of {limit} exceeded at line {line}, column {col}")]
    DepthLimitExceeded { line: usize, col: usize, limit: usize },

    /// Type mismatch during deserialization
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unterminated block error for the block bound to `key`.
    pub fn unterminated_block(line: usize, col: usize, key: &str) -> Self {
        Error::UnterminatedBlock {
            line,
            col,
            key: key.to_string(),
        }
    }

    /// Creates a missing value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightconf::Error;
    ///
    /// let err = Error::missing_value(3, 5, "dimmer");
    /// assert!(err.to_string().contains("'dimmer'"));
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn missing_value(line: usize, col: usize, key: &str) -> Self {
        Error::MissingValue {
            line,
            col,
            key: key.to_string(),
        }
    }

    /// Creates an unexpected token error.
    pub fn unexpected_token(line: usize, col: usize, found: &str, expected: &str) -> Self {
        Error::UnexpectedToken {
            line,
            col,
            found: found.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn duplicate_key(line: usize, col: usize, key: &str) -> Self {
        Error::DuplicateKey {
            line,
            col,
            key: key.to_string(),
        }
    }

    pub fn depth_limit_exceeded(line: usize, col: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { line, col, limit }
    }

    /// Creates a type mismatch error for typed deserialization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lightconf::Error;
    ///
    /// let err = Error::type_mismatch("integer", "mapping");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the `(line, column)` the error points at, if it came from the parser.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnterminatedBlock { line, col, .. }
            | Error::MissingValue { line, col, .. }
            | Error::UnexpectedToken { line, col, .. }
            | Error::DuplicateKey { line, col, .. }
            | Error::DepthLimitExceeded { line, col, .. } => Some((*line, *col)),
            Error::Io(_) | Error::TypeMismatch { .. } | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Custom(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_for_parser_errors() {
        assert_eq!(Error::missing_value(2, 7, "k").position(), Some((2, 7)));
        assert_eq!(
            Error::unexpected_token(1, 1, "}", "a key").position(),
            Some((1, 1))
        );
        assert_eq!(Error::custom("boom").position(), None);
    }

    #[test]
    fn test_display_messages() {
        let err = Error::unterminated_block(4, 1, "rack");
        assert_eq!(
            err.to_string(),
            "Unterminated block 'rack' opened at line 4, column 1"
        );

        let err = Error::depth_limit_exceeded(9, 3, 8);
        assert!(err.to_string().contains("limit of 8"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.lc");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing.lc")));
    }
}
