//! Table-interior guard and cut-point relocation.
//!
//! A truncation point that falls inside an open table must move: once the
//! client keeps appending later chunks into the same DOM region, a
//! half-rendered table visually absorbs whatever text follows. The guard
//! detects the condition; the relocator walks the cut backward, preferring
//! to keep a fully closed table over dropping it but never emitting one
//! that is still open at the end of the output.
//!
//! Nested tables are handled as one flattened region, matching upstream
//! behavior; the balance repairer backstops any outer table the flattened
//! scan misses.

use crate::engine::balance::TagCounter;
use crate::engine::config::TagConfig;
use crate::error::Result;
use crate::io::find_char_boundary;

/// Opening-tag prefix searched for, lowercase.
const OPEN_TABLE: &str = "<table";

/// Closing tag searched for, lowercase.
const CLOSE_TABLE: &str = "</table>";

/// Detects open tables at a prefix boundary and relocates unsafe cuts.
#[derive(Debug)]
pub struct TableGuard {
    /// Counters for the table-family subtags (rows, cells, sections).
    subtags: Vec<TagCounter>,
}

impl TableGuard {
    /// Builds subtag counters from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new(config: &TagConfig) -> Result<Self> {
        let subtags = config
            .table_subtags
            .iter()
            .map(|tag| TagCounter::new(tag))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { subtags })
    }

    /// Whether the prefix `html[..prefix_len]` ends inside an open table.
    ///
    /// Case-insensitive. A prefix length off a character boundary is
    /// clamped backward first.
    #[must_use]
    pub fn is_inside_unclosed_table(&self, html: &str, prefix_len: usize) -> bool {
        let end = find_char_boundary(html, prefix_len.min(html.len()));
        let prefix = &html[..end];
        let lower = prefix.to_ascii_lowercase();

        let Some(open) = lower.rfind(OPEN_TABLE) else {
            return false;
        };
        if lower.rfind(CLOSE_TABLE).is_some_and(|close| close > open) {
            return false;
        }
        // The last opened table never closes within the prefix.
        if !lower[open..].contains(CLOSE_TABLE) {
            return true;
        }
        let region = &prefix[open..];
        self.subtags
            .iter()
            .any(|t| t.open_count(region) > t.close_count(region))
    }

    /// Moves an unsafe cut index backward to a position outside the open
    /// table.
    ///
    /// Let P be the opening position of the last unclosed table before
    /// `cut` and C the first table close at or after P. The cut relocates
    /// to just after C when C lies before `cut` and no table-family subtag
    /// is left open between C and `cut`; otherwise it relocates to P,
    /// dropping the partially generated table entirely.
    #[must_use]
    pub fn relocate_cut(&self, html: &str, cut: usize) -> usize {
        let cut = find_char_boundary(html, cut.min(html.len()));
        let lower = html.to_ascii_lowercase();

        let Some(p) = last_unclosed_open(&lower[..cut]) else {
            return cut;
        };
        match lower[p..].find(CLOSE_TABLE).map(|rel| p + rel) {
            Some(close) if close + CLOSE_TABLE.len() <= cut => {
                let resume = close + CLOSE_TABLE.len();
                let span = &html[resume..cut];
                if self
                    .subtags
                    .iter()
                    .all(|t| t.open_count(span) <= t.close_count(span))
                {
                    resume
                } else {
                    p
                }
            }
            _ => p,
        }
    }
}

/// Position of the last `<table` with no matching `</table>` in the text.
///
/// Pairing is sequential: each close pops the most recent unmatched open.
/// Stray closes with no open are ignored.
fn last_unclosed_open(lower: &str) -> Option<usize> {
    let mut stack: Vec<usize> = Vec::new();
    let mut pos = 0;
    loop {
        let next_open = lower[pos..].find(OPEN_TABLE).map(|rel| pos + rel);
        let next_close = lower[pos..].find(CLOSE_TABLE).map(|rel| pos + rel);
        match (next_open, next_close) {
            (Some(open), Some(close)) if open < close => {
                stack.push(open);
                pos = open + OPEN_TABLE.len();
            }
            (_, Some(close)) => {
                stack.pop();
                pos = close + CLOSE_TABLE.len();
            }
            (Some(open), None) => {
                stack.push(open);
                pos = open + OPEN_TABLE.len();
            }
            (None, None) => break,
        }
    }
    stack.last().copied()
}
