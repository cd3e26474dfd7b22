//! Line parser — matches one line of checker output against the error-line
//! shape and extracts an [`ErrorRecord`].
//!
//! ```text
//! <path>.py:<lineno>: <severity>: <message>  [<category>]
//! ```
//!
//! The whole line must match. Anything else (summaries, blank lines, notes
//! without an error code) yields `None`; that is the common case, not a
//! failure.
//!
//! The `regex` crate reports captures with leftmost-first priority, the same
//! as a backtracking engine. With the greedy `message` group that means the
//! rightmost `  [category]` suffix that reaches end-of-line is the delimiter,
//! even when the message itself contains bracketed text.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ErrorRecord;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\A",
        r"(?P<path>.+\.py):",
        r"(?P<lineno>[0-9]+): ",
        r"(?P<severity>[a-z]+): ",
        r"(?P<message>.+)  ",
        r"\[(?P<category>[a-z-]+)\]",
        r"\z",
    ))
    .expect("built-in error line pattern must compile")
});

/// Parse one line of checker output.
///
/// A single trailing `\n` or `\r\n` is ignored; [`ErrorRecord::raw_line`]
/// still holds the input unmodified.
pub fn parse(line: &str) -> Option<ErrorRecord> {
    let body = strip_line_terminator(line);
    let Some(caps) = LINE_RE.captures(body) else {
        tracing::trace!(line = body, "not an error line");
        return None;
    };

    // Only ASCII digits are captured, so overflow is the one way this fails.
    let Ok(line_number) = caps["lineno"].parse::<u64>() else {
        tracing::trace!(lineno = &caps["lineno"], "line number out of range");
        return None;
    };

    Some(ErrorRecord::new(
        line,
        &caps["path"],
        line_number,
        &caps["severity"],
        &caps["message"],
        &caps["category"],
    ))
}

/// Lazily parse a stream of lines, keeping only the ones that are error lines.
pub fn parse_lines<I, S>(lines: I) -> impl Iterator<Item = ErrorRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().filter_map(|line| parse(line.as_ref()))
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
