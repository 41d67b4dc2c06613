//! Tag-balance counting and repair.
//!
//! Counts open vs. close occurrences for the tracked tag vocabulary and
//! appends whatever closing tags are missing, in nesting order: cells,
//! rows, sections, the table itself, and finally containers. Repair is
//! idempotent; already-balanced text gains nothing.
//!
//! Detection is lexical, not a parse: a tag-like substring inside an
//! attribute value or literal text will be counted. The name-boundary
//! class in the pattern keeps `<th` from matching `<thead` and `</th>`
//! from matching `</thead>`. An opening tag truncated at end of buffer
//! still counts, so the open-table guard and the repairer agree on what
//! is open.

use crate::core::TagBalance;
use crate::engine::config::TagConfig;
use crate::error::Result;
use regex::Regex;

/// Open/close matcher for a single tag name, case-insensitive.
#[derive(Debug)]
pub struct TagCounter {
    tag: String,
    open: Regex,
    close: Regex,
    closer: String,
}

impl TagCounter {
    /// Compiles the open/close patterns for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new(tag: &str) -> Result<Self> {
        Ok(Self {
            tag: tag.to_string(),
            open: Regex::new(&format!(r"(?i)<{tag}(?:[\s/>]|$)"))?,
            close: Regex::new(&format!(r"(?i)</{tag}\s*>"))?,
            closer: format!("</{tag}>"),
        })
    }

    /// The tag name this counter tracks.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The closing tag appended during repair.
    #[must_use]
    pub fn closer(&self) -> &str {
        &self.closer
    }

    /// Number of opening occurrences in `text`.
    #[must_use]
    pub fn open_count(&self, text: &str) -> usize {
        self.open.find_iter(text).count()
    }

    /// Number of closing occurrences in `text`.
    #[must_use]
    pub fn close_count(&self, text: &str) -> usize {
        self.close.find_iter(text).count()
    }

    /// Number of closing tags missing in `text` (zero when over-closed).
    #[must_use]
    pub fn missing(&self, text: &str) -> usize {
        self.open_count(text).saturating_sub(self.close_count(text))
    }
}

/// Appends missing closing tags for the tracked vocabulary.
#[derive(Debug)]
pub struct TagBalancer {
    /// Counters in repair order: subtags, table, containers.
    counters: Vec<TagCounter>,
}

impl TagBalancer {
    /// Builds counters for every tag in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new(config: &TagConfig) -> Result<Self> {
        let counters = config
            .tags_in_repair_order()
            .map(TagCounter::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { counters })
    }

    /// Closing tags that `repair` would append, in order.
    #[must_use]
    pub fn missing_closers(&self, html: &str) -> Vec<String> {
        let mut closers = Vec::new();
        for counter in &self.counters {
            for _ in 0..counter.missing(html) {
                closers.push(counter.closer().to_string());
            }
        }
        closers
    }

    /// Appends the missing closing tags to `html`.
    ///
    /// Idempotent: `repair(repair(t)) == repair(t)`.
    #[must_use]
    pub fn repair(&self, html: &str) -> String {
        let mut out = html.to_string();
        for closer in self.missing_closers(html) {
            out.push_str(&closer);
        }
        out
    }

    /// Per-tag open/close counts over `html`, in repair order.
    #[must_use]
    pub fn report(&self, html: &str) -> Vec<TagBalance> {
        self.counters
            .iter()
            .map(|counter| TagBalance {
                tag: counter.tag().to_string(),
                open: counter.open_count(html),
                close: counter.close_count(html),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use test_case::test_case;

    fn balancer() -> TagBalancer {
        TagBalancer::new(&TagConfig::new()).unwrap()
    }

    #[test_case("<div>a", "<div>a</div>"; "unclosed div")]
    #[test_case("<table><tr><td>x", "<table><tr><td>x</td></tr></table>"; "open table row cell")]
    #[test_case("<div><table><thead><tr><th>h", "<div><table><thead><tr><th>h</th></tr></thead></table></div>"; "header cell chain")]
    #[test_case("<div>a</div>", "<div>a</div>"; "already balanced")]
    #[test_case("<div>a<table", "<div>a<table</table></div>"; "open tag truncated at end of buffer")]
    #[test_case("", ""; "empty input")]
    #[test_case("plain text", "plain text"; "no markup")]
    fn test_repair(input: &str, expected: &str) {
        assert_eq!(balancer().repair(input), expected);
    }

    #[test]
    fn test_repair_idempotent() {
        let b = balancer();
        let once = b.repair("<div><table><tbody><tr><td>deep");
        assert_eq!(b.repair(&once), once);
    }

    #[test]
    fn test_th_does_not_match_thead() {
        let counter = TagCounter::new("th").unwrap();
        assert_eq!(counter.open_count("<thead><th>x</th></thead>"), 1);
        assert_eq!(counter.close_count("<thead><th>x</th></thead>"), 1);
    }

    #[test]
    fn test_open_count_with_attributes() {
        let counter = TagCounter::new("div").unwrap();
        assert_eq!(counter.open_count("<div class=\"card\"><div>"), 2);
        assert_eq!(counter.open_count("<divider>"), 0);
    }

    #[test]
    fn test_case_insensitive_counting() {
        let b = balancer();
        assert_eq!(b.repair("<DIV>a"), "<DIV>a</div>");
    }

    #[test]
    fn test_over_closed_left_alone() {
        let b = balancer();
        assert_eq!(b.repair("a</div></div>"), "a</div></div>");
    }

    #[test]
    fn test_missing_closers_order() {
        let closers = balancer().missing_closers("<div><table><tr><td>");
        assert_eq!(closers, vec!["</td>", "</tr>", "</table>", "</div>"]);
    }

    #[test]
    fn test_report_counts() {
        let report = balancer().report("<table><tr><td>a</td><td>b");
        let td = report.iter().find(|t| t.tag == "td").unwrap();
        assert_eq!(td.open, 2);
        assert_eq!(td.close, 1);
        let table = report.iter().find(|t| t.tag == "table").unwrap();
        assert_eq!(table.missing(), 1);
    }
}
