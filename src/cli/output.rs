//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{BalanceReport, TrimOutcome};
use crate::error::Error;
use crate::io::truncate_graphemes;
use serde::Serialize;
use std::fmt::Write;

/// Maximum grapheme length of the verbose HTML preview.
const PREVIEW_GRAPHEMES: usize = 200;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a trim outcome.
///
/// Text output is the repaired HTML itself, suitable for piping; JSON
/// carries the full outcome (cut index, strategy, appended closers).
#[must_use]
pub fn format_trim(outcome: &TrimOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => outcome.html.clone(),
        OutputFormat::Json => format_json(outcome),
    }
}

/// Formats a merge result.
#[must_use]
pub fn format_merge(html: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => html.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "html": html })),
    }
}

/// Formats a balance report.
#[must_use]
pub fn format_check(report: &BalanceReport, preview: Option<&str>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_check_text(report, preview),
        OutputFormat::Json => format_json(report),
    }
}

fn format_check_text(report: &BalanceReport, preview: Option<&str>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{:<8} {:>6} {:>6} {:>8}", "Tag", "Open", "Close", "Missing");
    output.push_str(&"-".repeat(32));
    output.push('\n');
    for tag in &report.tags {
        let _ = writeln!(
            output,
            "{:<8} {:>6} {:>6} {:>8}",
            tag.tag,
            tag.open,
            tag.close,
            tag.missing()
        );
    }
    let _ = writeln!(
        output,
        "\nBalanced:          {}",
        if report.is_balanced() { "yes" } else { "no" }
    );
    let _ = writeln!(
        output,
        "Inside open table: {}",
        if report.inside_open_table { "yes" } else { "no" }
    );
    if let Some(text) = preview {
        let _ = writeln!(output, "\nPreview:\n{}", truncate_graphemes(text, PREVIEW_GRAPHEMES));
    }
    output
}

/// Formats a confirmation for output written to a file.
#[must_use]
pub fn format_written(path: &str, bytes: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Wrote {bytes} bytes to {path}\n"),
        OutputFormat::Json => {
            format_json(&serde_json::json!({ "path": path, "bytes": bytes }))
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": err.to_string() })),
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
