//! Error types for mypy-baseline-core.
//!
//! Only configuration can fail. A line that is not an error line is a plain
//! `None` from the parser, never an error value.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config source could not be read, parsed, or deserialized
    /// (including a negative `depth`).
    #[error("failed to load config from {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },

    /// An entry of `ignore` is not a valid regular expression.
    #[error("invalid ignore pattern {pattern:?}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
