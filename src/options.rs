//! Configuration options for writing scripts.
//!
//! - [`AssOptions`]: main configuration struct
//! - [`LineEnding`]: terminator placed between output lines
//! - [`ColumnPolicy`]: how array sections treat records whose fields differ
//!   from the first record's
//!
//! ## Examples
//!
//! ```rust
//! use serde_ass::{AssOptions, ColumnPolicy, LineEnding};
//!
//! let options = AssOptions::new()
//!     .with_line_ending(LineEnding::Lf)
//!     .with_column_policy(ColumnPolicy::FirstRecord);
//! assert_eq!(options.line_ending.as_str(), "\n");
//! ```

/// Line terminator for output. Input accepts both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Column handling when writing array sections.
///
/// The `Format:` line of an array section is always taken from the fields of
/// its first record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    /// Every record must have exactly the first record's fields, otherwise
    /// writing fails with [`crate::Error::ColumnMismatch`].
    #[default]
    Strict,
    /// Legacy behavior: fields missing from a record are written empty and
    /// fields the first record lacks are dropped.
    FirstRecord,
}

/// Configuration options for [`crate::to_string_with_options`].
#[derive(Clone, Debug, Default)]
pub struct AssOptions {
    pub line_ending: LineEnding,
    pub column_policy: ColumnPolicy,
}

impl AssOptions {
    /// Creates default options (`\r\n` line endings, strict columns).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ass::{AssOptions, ColumnPolicy, LineEnding};
    ///
    /// let options = AssOptions::new();
    /// assert_eq!(options.line_ending, LineEnding::CrLf);
    /// assert_eq!(options.column_policy, ColumnPolicy::Strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_column_policy(mut self, column_policy: ColumnPolicy) -> Self {
        self.column_policy = column_policy;
        self
    }
}
