//! Terminal formatting and small string helpers.
//!
//! The coloured helpers carry no logic of their own; they give every
//! user-facing line a consistent look. `colored` drops the escape codes when
//! `NO_COLOR` is set or stdout is not a terminal.

use colored::{ColoredString, Colorize};
use std::error::Error;

/// A stage announcement, e.g. "Creating HTML page...".
pub fn status(message: &str) -> ColoredString {
    message.bold()
}

/// The final success banner.
pub fn success(message: &str) -> ColoredString {
    message.bold().cyan()
}

/// A recoverable problem the user should know about.
pub fn warning(message: &str) -> ColoredString {
    message.yellow()
}

/// A fatal problem or a failed best-effort step.
pub fn failure(message: &str) -> ColoredString {
    message.red()
}

/// Render an error followed by each of its sources, one per line.
///
/// ```ignore
/// could not read article 'story.txt'
///   caused by: No such file or directory (os error 2)
/// ```
pub fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters (not bytes) are cut on a character
/// boundary, with an ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}
