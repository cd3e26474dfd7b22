//! Core types for mypy-baseline-core.
//!
//! [`ErrorRecord`] is the structured form of one checker error line. It is
//! only ever produced by [`crate::parser::parse`] and never mutated after.

use std::path::{Path, PathBuf};

/// One parsed checker error line.
///
/// All fields are extracted when the line is parsed, so a record can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorRecord {
    raw_line: String,
    path: PathBuf,
    line_number: u64,
    severity: String,
    message: String,
    category: String,
}

impl ErrorRecord {
    pub(crate) fn new(
        raw_line: impl Into<String>,
        path: impl Into<PathBuf>,
        line_number: u64,
        severity: impl Into<String>,
        message: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            raw_line: raw_line.into(),
            path: path.into(),
            line_number,
            severity: severity.into(),
            message: message.into(),
            category: category.into(),
        }
    }

    /// Parse a checker line. Shorthand for [`crate::parser::parse`].
    pub fn parse(line: &str) -> Option<Self> {
        crate::parser::parse(line)
    }

    /// The line exactly as it was handed to the parser.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Source file the error points at. Always ends in `.py`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Lowercase severity token, e.g. `error` or `note`.
    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error code tag, e.g. `return-value` or `attr-defined`.
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl std::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_line)
    }
}
