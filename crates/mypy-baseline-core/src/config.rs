//! Configuration types for mypy-baseline.
//!
//! Options live under `[tool.mypy_baseline]` in a TOML file, normally
//! `pyproject.toml`. [`Config::load`] layers that file over the built-in
//! defaults; [`Config::defaults`] returns the defaults without touching the
//! filesystem (useful in tests).

use std::path::Path;

use serde::{de::Error as _, Deserialize, Deserializer};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Table that holds our options inside the config file.
pub const SECTION: &str = "tool.mypy_baseline";

const DEFAULT_CONFIG: &str = r#"
[tool.mypy_baseline]
depth             = 40
preserve_position = false
ignore            = []
ignore_categories = []
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Normalization options, loaded from `[tool.mypy_baseline]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Leading path components kept when rendering. `0` renders an empty path.
    #[serde(default = "default_depth", deserialize_with = "non_negative")]
    pub depth: usize,
    /// Keep real line numbers instead of rendering `0`.
    #[serde(default)]
    pub preserve_position: bool,
    /// Regexes matched against the rendered line; any hit suppresses the record.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Categories suppressed outright.
    #[serde(default)]
    pub ignore_categories: Vec<String>,
}

fn default_depth() -> usize { 40 }

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let depth = i64::deserialize(deserializer)?;
    usize::try_from(depth)
        .map_err(|_| D::Error::custom(format!("depth must be >= 0, got {depth}")))
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `[tool.mypy_baseline]` from `path`, layered on top of the
    /// built-in defaults. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let wrap = |source: config::ConfigError| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        };

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()
            .map_err(wrap)?
            .get(SECTION)
            .map_err(wrap)?;

        tracing::debug!(
            path = %path.display(),
            depth = cfg.depth,
            preserve_position = cfg.preserve_position,
            "config loaded"
        );
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .get(SECTION)
            .expect("built-in default config must deserialize correctly")
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_preserve_position(mut self, preserve_position: bool) -> Self {
        self.preserve_position = preserve_position;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
