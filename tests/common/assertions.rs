//! Domain-specific assertion macros for mypy-baseline harnesses.
//!
//! These add context-rich failure messages that name the raw line and the
//! field that did not match.

// ---------------------------------------------------------------------------
// Parse assertions
// ---------------------------------------------------------------------------

/// Assert that a line parses into the expected fields.
///
/// ```rust
/// assert_parsed!("a.py:1: error: x  [misc]", "a.py", 1, "error", "x", "misc");
/// ```
#[macro_export]
macro_rules! assert_parsed {
    ($line:expr, $path:expr, $lineno:expr, $severity:expr, $message:expr, $category:expr) => {{
        let line: &str = $line;
        let rec = match mypy_baseline_core::parse(line) {
            Some(rec) => rec,
            None => panic!("assert_parsed! failed: line did not match.\n  line: {:?}", line),
        };
        pretty_assertions::assert_eq!(
            (
                rec.path(),
                rec.line_number(),
                rec.severity(),
                rec.message(),
                rec.category()
            ),
            (
                std::path::Path::new($path),
                $lineno,
                $severity,
                $message,
                $category
            ),
            "fields differ for line {:?}",
            line
        );
    }};
}

/// Assert that a line is not recognised as an error line.
#[macro_export]
macro_rules! assert_no_match {
    ($line:expr) => {{
        let line: &str = $line;
        if let Some(rec) = mypy_baseline_core::parse(line) {
            panic!(
                "assert_no_match! failed: line unexpectedly matched.\n  line: {:?}\n  record: {:?}",
                line, rec
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Render assertions
// ---------------------------------------------------------------------------

/// Assert that a rendered line parses again and return the record.
#[macro_export]
macro_rules! assert_reparses {
    ($rendered:expr) => {{
        let rendered: &str = &$rendered;
        match mypy_baseline_core::parse(rendered) {
            Some(rec) => rec,
            None => panic!(
                "assert_reparses! failed: rendered line is not parseable.\n  rendered: {:?}",
                rendered
            ),
        }
    }};
}
