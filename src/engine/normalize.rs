//! Structural whitespace normalization.
//!
//! Cleans up the line-break and spacing artifacts the generator leaves
//! between structural elements. Every rewrite is idempotent, so the
//! normalizer can be re-run on a growing buffer without drift.

use crate::error::Result;
use regex::Regex;

/// Normalizes generator whitespace artifacts in HTML text.
///
/// Rules applied, in order:
/// 1. Literal `**` emphasis markers leaked from Markdown formatting are
///    removed.
/// 2. Runs of two or more `<br>` elements collapse to a single `<br>`.
/// 3. A closing heading tag is joined to an immediately following subtitle
///    division (whitespace between them removed).
/// 4. Line breaks and whitespace immediately before `<table` are removed,
///    including after a closing block tag.
#[derive(Debug)]
pub struct Normalizer {
    br_runs: Regex,
    heading_subtitle_gap: Regex,
    table_gap: Regex,
}

impl Normalizer {
    /// Compiles the normalization patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            br_runs: Regex::new(r"(?i)(?:<br\s*/?>\s*){2,}")?,
            heading_subtitle_gap: Regex::new(
                r#"(?i)(</h[1-6]>)\s+(<div[^>]*class="[^"]*subtitle[^"]*")"#,
            )?,
            table_gap: Regex::new(r"(?i)(?:\s+|<br\s*/?>)+(<table)")?,
        })
    }

    /// Applies all normalization rules.
    ///
    /// Idempotent: `normalize(normalize(t)) == normalize(t)`.
    #[must_use]
    pub fn normalize(&self, html: &str) -> String {
        let text = html.replace("**", "");
        let text = self.br_runs.replace_all(&text, "<br>");
        let text = self.heading_subtitle_gap.replace_all(&text, "$1$2");
        self.table_gap.replace_all(&text, "$1").into_owned()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new().unwrap()
    }

    #[test]
    fn test_br_runs_collapse() {
        let out = normalizer().normalize("a<br><br><br><br>b");
        assert_eq!(out, "a<br>b");
    }

    #[test]
    fn test_br_variants_collapse() {
        let out = normalizer().normalize("a<br/>\n<br >\n<BR>b");
        assert_eq!(out, "a<br>b");
    }

    #[test]
    fn test_single_br_kept() {
        assert_eq!(normalizer().normalize("a<br>b"), "a<br>b");
    }

    #[test]
    fn test_heading_joined_to_subtitle() {
        let input = "<h2>Love</h2>\n  <div class=\"subtitle\">overview</div>";
        let out = normalizer().normalize(input);
        assert_eq!(out, "<h2>Love</h2><div class=\"subtitle\">overview</div>");
    }

    #[test]
    fn test_heading_gap_to_plain_div_kept() {
        let input = "<h2>Love</h2>\n<div class=\"card\">x</div>";
        assert_eq!(normalizer().normalize(input), input);
    }

    #[test]
    fn test_whitespace_before_table_removed() {
        let out = normalizer().normalize("</p>\n<br><br>\n<table><tr>");
        assert_eq!(out, "</p><table><tr>");
    }

    #[test]
    fn test_bold_markers_stripped() {
        let out = normalizer().normalize("<p>**Fortune**: bright</p>");
        assert_eq!(out, "<p>Fortune: bright</p>");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "a<br><br>b\n\n<table><td>**x**</td>",
            "<h3>T</h3> <div class=\"subtitle s\">u</div><br/><br/>",
            "",
            "plain text with no markup",
        ];
        let n = normalizer();
        for input in inputs {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
