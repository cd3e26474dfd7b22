//! Suppression rules built from [`Config::ignore`] and
//! [`Config::ignore_categories`].

use std::collections::HashSet;

use regex::Regex;

use crate::config::Config;
use crate::error::ConfigError;
use crate::types::ErrorRecord;

/// Compiled ignore rules. Build once per run, then query per record.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<Regex>,
    categories: HashSet<String>,
}

impl IgnoreRules {
    /// Compile the `ignore` patterns of `config`. Fails on the first pattern
    /// that is not a valid regex.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let patterns = config
            .ignore
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidIgnorePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            categories: config.ignore_categories.iter().cloned().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.categories.is_empty()
    }

    /// Whether `record` is suppressed. `rendered` is its normalized line,
    /// which is what the patterns search.
    pub fn is_ignored(&self, record: &ErrorRecord, rendered: &str) -> bool {
        self.categories.contains(record.category())
            || self.patterns.iter().any(|re| re.is_match(rendered))
    }
}
