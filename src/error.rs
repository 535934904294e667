//! Error types for ASS parsing and stringifying.
//!
//! Every failure aborts the whole call: there is no partial document.
//!
//! ## Error Categories
//!
//! - **Structural errors**: a line that does not have the expected shape
//!   ([`Error::Syntax`], [`Error::MissingFormat`]), or document content that
//!   does not match the codec registered for its section
//!   ([`Error::ShapeMismatch`], [`Error::ColumnMismatch`])
//! - **Range errors**: a time or color component outside its bound
//!   ([`Error::OutOfRange`])
//! - **Field errors**: time text that does not match `H:MM:SS.CC`
//!   ([`Error::InvalidTime`])
//!
//! Malformed color text is not an error, see [`crate::AssColor::parse`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_ass::{from_str, Error};
//!
//! let result = from_str("Title: no header");
//! assert!(matches!(result, Err(Error::Syntax { line: 1, .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing a script.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A line that does not have the shape its position requires
    #[error("Syntax error at line {line}: {msg}\n{context}\nExpected: {expected}")]
    Syntax {
        line: usize,
        msg: String,
        context: String,
        expected: String,
    },

    /// A record line inside an array section appeared before its `Format:` line
    #[error("Missing format at line {line}: section [{section}] has a record before its 'Format:' line")]
    MissingFormat { line: usize, section: String },

    /// A bounded component outside its valid range
    #[error("invalid value for {field}: value must be in range [{min},{max}], but got '{value}'")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Time text that does not match the `H:MM:SS.CC` pattern
    #[error("invalid time value '{value}': expected '{expected}'")]
    InvalidTime { value: String, expected: String },

    /// Section content of the wrong shape for the codec registered under its name
    #[error("section [{section}] expects {expected} content")]
    ShapeMismatch { section: String, expected: String },

    /// A record whose columns differ from the first record of its section
    #[error("section [{section}] record {record} has columns [{found}], expected [{expected}]")]
    ColumnMismatch {
        section: String,
        record: usize,
        expected: String,
        found: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error for `context` found at `line` (1-based).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::Error;
    ///
    /// let err = Error::syntax(3, "missing colon", "Title My Show", "Key: Value");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, msg: &str, context: &str, expected: &str) -> Self {
        Error::Syntax {
            line,
            msg: msg.to_string(),
            context: context.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn missing_format(line: usize, section: &str) -> Self {
        Error::MissingFormat {
            line,
            section: section.to_string(),
        }
    }

    /// Creates a range error naming the field, the offending value and the bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::Error;
    ///
    /// let err = Error::out_of_range("minutes", 60, 0, 59);
    /// assert!(err.to_string().contains("[0,59]"));
    /// ```
    pub fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }

    pub fn invalid_time(value: &str, expected: &str) -> Self {
        Error::InvalidTime {
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn shape_mismatch(section: &str, expected: &str) -> Self {
        Error::ShapeMismatch {
            section: section.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn column_mismatch(section: &str, record: usize, expected: &[&str], found: &[&str]) -> Self {
        Error::ColumnMismatch {
            section: section.to_string(),
            record,
            expected: expected.join(","),
            found: found.join(","),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
