//! Domain result types for trim and balance operations.
//!
//! These are pure data models with no I/O dependencies, produced by the
//! engine and consumed by callers and the CLI's JSON output.

use serde::{Deserialize, Serialize};

/// How a safe cut point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutStrategy {
    /// Cut immediately after the last complete `ITEM_END` sentinel comment.
    ItemMarker,
    /// No sentinel present; cut after the last closing container tag.
    ///
    /// A conservative heuristic for generator output that predates marker
    /// support; lower confidence than a marker cut.
    ContainerClose,
}

/// A candidate truncation point located by the boundary scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPoint {
    /// Byte index into the buffer (always on a character boundary).
    pub index: usize,
    /// How the index was chosen.
    pub strategy: CutStrategy,
}

/// Result of a safe-trim pass over a stream buffer.
///
/// # Examples
///
/// ```
/// use tagmend_rs::engine::TrimEngine;
///
/// let engine = TrimEngine::new().unwrap();
/// let outcome = engine.safe_trim("<div>hello");
/// assert_eq!(outcome.html, "<div>hello</div>");
/// assert_eq!(outcome.appended, vec!["</div>".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimOutcome {
    /// The repaired output text.
    pub html: String,
    /// Final truncation index, when the buffer was truncated.
    pub cut_index: Option<usize>,
    /// How the cut point was chosen, when one was found.
    pub strategy: Option<CutStrategy>,
    /// Whether the table-interior guard relocated the cut point.
    pub relocated: bool,
    /// Closing tags appended by the balance repairer, in order.
    pub appended: Vec<String>,
}

/// Open/close counts for one tracked tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBalance {
    /// Tag name, e.g. `"td"`.
    pub tag: String,
    /// Number of opening occurrences.
    pub open: usize,
    /// Number of closing occurrences.
    pub close: usize,
}

impl TagBalance {
    /// Number of closing tags missing for this tag.
    #[must_use]
    pub const fn missing(&self) -> usize {
        self.open.saturating_sub(self.close)
    }
}

/// Per-tag balance counts plus the open-table verdict for a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Counts for every tracked tag, in repair order.
    pub tags: Vec<TagBalance>,
    /// Whether the text ends inside a structurally open table.
    pub inside_open_table: bool,
}

impl BalanceReport {
    /// True when every tracked tag has matching open/close counts.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.tags.iter().all(|t| t.open == t.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_balance_missing() {
        let balance = TagBalance {
            tag: "td".to_string(),
            open: 3,
            close: 1,
        };
        assert_eq!(balance.missing(), 2);
    }

    #[test]
    fn test_missing_saturates_on_extra_closers() {
        let balance = TagBalance {
            tag: "div".to_string(),
            open: 1,
            close: 2,
        };
        assert_eq!(balance.missing(), 0);
    }

    #[test]
    fn test_report_balanced() {
        let report = BalanceReport {
            tags: vec![TagBalance {
                tag: "table".to_string(),
                open: 1,
                close: 1,
            }],
            inside_open_table: false,
        };
        assert!(report.is_balanced());
    }

    #[test]
    fn test_strategy_serializes_kebab_case() {
        let json = serde_json::to_string(&CutStrategy::ItemMarker).unwrap_or_default();
        assert_eq!(json, "\"item-marker\"");
    }
}
