//! Error types shared by every converter.
//!
//! Each conversion either succeeds or fails with exactly one [`Error`]. The
//! variants collapse onto four [`ErrorKind`]s so a caller can branch on the
//! category without matching on message text:
//!
//! - **Invalid format**: the input does not match the grammar of the selected
//!   source format (JSON syntax errors carry line/column information)
//! - **Encoding range**: a code point cannot be represented in the selected
//!   encoding
//! - **Empty input**: nothing usable was supplied
//! - **Unsupported option**: a format or encoding tag was not recognised
//!
//! ## Examples
//!
//! ```rust
//! use convkit::{radix, ErrorKind, NumberBase};
//!
//! let err = radix::convert("abc", NumberBase::Dec).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidFormat);
//! assert!(err.to_string().contains("abc"));
//! ```

use std::fmt;
use thiserror::Error;

/// Every failure a conversion can produce.
///
/// The display text is meant to be shown to an end user in place of the
/// conversion output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input does not match the expected lexical or structural pattern
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// JSON syntax error with position
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Code point outside the range of the selected encoding
    #[error("Encoding range error: {0}")]
    EncodingRange(String),

    /// No usable rows, lines or characters
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Format, encoding or direction tag not recognised
    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    EncodingRange,
    EmptyInput,
    UnsupportedOption,
}

impl Error {
    /// Creates an invalid format error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convkit::Error;
    ///
    /// let err = Error::invalid_format("expected rgb(r, g, b)");
    /// assert!(err.to_string().contains("rgb(r, g, b)"));
    /// ```
    pub fn invalid_format<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidFormat(msg.to_string())
    }

    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convkit::{Error, ErrorKind};
    ///
    /// let err = Error::syntax(3, 7, "expected ':'");
    /// assert!(err.to_string().contains("line 3"));
    /// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding range error.
    pub fn encoding_range<T: fmt::Display>(msg: T) -> Self {
        Error::EncodingRange(msg.to_string())
    }

    /// Creates an empty input error.
    pub fn empty_input<T: fmt::Display>(msg: T) -> Self {
        Error::EmptyInput(msg.to_string())
    }

    /// Creates an unsupported option error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convkit::Error;
    ///
    /// let err = Error::unsupported_option("encoding 'latin9'");
    /// assert_eq!(err.to_string(), "Unsupported option: encoding 'latin9'");
    /// ```
    pub fn unsupported_option<T: fmt::Display>(msg: T) -> Self {
        Error::UnsupportedOption(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidFormat(_) | Error::Syntax { .. } => ErrorKind::InvalidFormat,
            Error::EncodingRange(_) => ErrorKind::EncodingRange,
            Error::EmptyInput(_) => ErrorKind::EmptyInput,
            Error::UnsupportedOption(_) => ErrorKind::UnsupportedOption,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.line() == 0 {
            return Error::InvalidFormat(err.to_string());
        }
        let text = err.to_string();
        let position = format!(" at line {} column {}", err.line(), err.column());
        let msg = text.strip_suffix(&position).unwrap_or(&text);
        Error::syntax(err.line(), err.column(), msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Error::invalid_format("x").kind(), ErrorKind::InvalidFormat);
        assert_eq!(Error::syntax(1, 1, "x").kind(), ErrorKind::InvalidFormat);
        assert_eq!(Error::encoding_range("x").kind(), ErrorKind::EncodingRange);
        assert_eq!(Error::empty_input("x").kind(), ErrorKind::EmptyInput);
        assert_eq!(
            Error::unsupported_option("x").kind(),
            ErrorKind::UnsupportedOption
        );
    }

    #[test]
    fn test_from_serde_json_keeps_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\" 1\n}").unwrap_err();
        match Error::from(json_err) {
            Error::Syntax { line, col, msg } => {
                assert_eq!(line, 2);
                assert_eq!(col, 7);
                assert_eq!(msg, "expected `:`");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_syntax_display() {
        let err = Error::syntax(2, 5, "unexpected character 'x'");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 2, column 5: unexpected character 'x'"
        );
    }
}
