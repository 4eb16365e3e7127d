//! CLI output formatting.
//!
//! Output is quiet by default. With `--verbose` every file actually written
//! gets one line, printed before the write:
//!
//! ```text
//! creating out/cmd/govanity/index.html
//! updating out/cmd/uuenc/index.html
//! ```
//!
//! Unchanged files print nothing. `--summary` adds a closing count line:
//!
//! ```text
//! 3 pages: 1 created, 1 updated, 1 unchanged
//! ```
//!
//! Each `format_*` function is pure and returns the text; the `print_*`
//! wrappers write it to stdout.

use crate::generate::GenerateSummary;
use crate::write::{WriteEvent, WriteOutcome};

/// Format a write event. Unchanged pages produce no line.
pub fn format_write_event(event: &WriteEvent) -> Option<String> {
    let verb = match event.outcome {
        WriteOutcome::Created => "creating",
        WriteOutcome::Updated => "updating",
        WriteOutcome::Unchanged => return None,
    };
    Some(format!("{} {}", verb, event.path.display()))
}

pub fn print_write_event(event: &WriteEvent) {
    if let Some(line) = format_write_event(event) {
        println!("{}", line);
    }
}

/// Closing count line for `--summary`.
pub fn format_summary(summary: &GenerateSummary) -> String {
    let total = summary.total();
    format!(
        "{} {}: {} created, {} updated, {} unchanged",
        total,
        if total == 1 { "page" } else { "pages" },
        summary.created,
        summary.updated,
        summary.unchanged
    )
}

pub fn print_summary(summary: &GenerateSummary) {
    println!("{}", format_summary(summary));
}
