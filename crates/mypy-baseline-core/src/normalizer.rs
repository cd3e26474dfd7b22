//! Normalizer — renders an [`ErrorRecord`] as a baseline line that is stable
//! across runs.
//!
//! The output uses the exact shape the parser consumes, so a rendered line
//! parses again as long as the truncated path still ends in `.py`.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::error::ConfigError;
use crate::ignore::IgnoreRules;
use crate::parser;
use crate::types::ErrorRecord;

/// Keep the first `depth` components of `path`. `.` components are dropped
/// before counting. A `depth` of `0` gives an empty path.
pub fn truncate_path(path: &Path, depth: usize) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .take(depth)
        .collect()
}

/// Render `record` as a baseline line.
///
/// When `config.preserve_position` is off the line number is written as `0`
/// so that unrelated edits above an error do not show up as a diff.
pub fn render(record: &ErrorRecord, config: &Config) -> String {
    let path = truncate_path(record.path(), config.depth);
    let position = if config.preserve_position {
        record.line_number()
    } else {
        0
    };
    format!(
        "{}:{}: {}: {}  [{}]",
        path.display(),
        position,
        record.severity(),
        record.message(),
        record.category(),
    )
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// A [`Config`] paired with its compiled [`IgnoreRules`]: parse, filter, and
/// render in one call per line.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: Config,
    rules: IgnoreRules,
}

impl Normalizer {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let rules = IgnoreRules::from_config(&config)?;
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `record`, or `None` if an ignore rule suppresses it.
    pub fn normalize(&self, record: &ErrorRecord) -> Option<String> {
        let rendered = render(record, &self.config);
        if self.rules.is_ignored(record, &rendered) {
            tracing::debug!(line = record.raw_line(), "ignored by config");
            return None;
        }
        Some(rendered)
    }

    /// Parse and render one raw checker line. `None` for non-error lines and
    /// for ignored records.
    pub fn normalize_line(&self, line: &str) -> Option<String> {
        parser::parse(line).and_then(|record| self.normalize(&record))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
