//! mypy-baseline-core — parsing and normalization of mypy error lines.
//!
//! This crate turns raw type-checker output into canonical baseline entries
//! that stay stable when line numbers drift between runs.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► parser ──► ErrorRecord ──► ignore ──► normalizer ──► baseline line
//! ```
//!
//! Every stage is a pure function over one line. Nothing here reads the
//! baseline file, runs the checker, or diffs snapshots.

pub mod config;
pub mod error;
pub mod ignore;
pub mod normalizer;
pub mod parser;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use ignore::IgnoreRules;
pub use normalizer::{render, truncate_path, Normalizer};
pub use parser::{parse, parse_lines};
pub use types::ErrorRecord;
