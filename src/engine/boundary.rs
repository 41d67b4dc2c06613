//! Safe cut point location.
//!
//! Finds the latest point in a buffer corresponding to a fully completed
//! logical unit. Sentinel `ITEM_END` comments are authoritative: the
//! generator only emits one after the unit's nested structure is closed.
//! Without markers, the scanner falls back to the last closing container
//! tag; without either, there is no safe cut point and the caller keeps
//! the whole buffer.

use crate::core::{CutPoint, CutStrategy};
use crate::engine::config::{COMMENT_CLOSE, ITEM_END_PREFIX};

/// Finds the latest safe cut point in normalized HTML.
///
/// Returns `None` when neither an `ITEM_END` marker nor a closing `</div>`
/// exists anywhere in the text.
///
/// # Examples
///
/// ```
/// use tagmend_rs::core::CutStrategy;
/// use tagmend_rs::engine::find_cut_point;
///
/// let cut = find_cut_point("<div>a</div><!-- ITEM_END:1 --><p>tail").unwrap();
/// assert_eq!(cut.strategy, CutStrategy::ItemMarker);
/// assert_eq!(&"<div>a</div><!-- ITEM_END:1 --><p>tail"[..cut.index],
///            "<div>a</div><!-- ITEM_END:1 -->");
/// ```
#[must_use]
pub fn find_cut_point(html: &str) -> Option<CutPoint> {
    if let Some(index) = last_complete_marker_end(html) {
        return Some(CutPoint {
            index,
            strategy: CutStrategy::ItemMarker,
        });
    }
    let lower = html.to_ascii_lowercase();
    lower.rfind("</div>").map(|pos| CutPoint {
        index: pos + "</div>".len(),
        strategy: CutStrategy::ContainerClose,
    })
}

/// Index immediately after the `-->` of the last complete `ITEM_END` marker.
///
/// A marker whose comment never closes (the stream stopped mid-comment) is
/// skipped in favor of the previous one.
fn last_complete_marker_end(html: &str) -> Option<usize> {
    let mut search_end = html.len();
    while let Some(pos) = html[..search_end].rfind(ITEM_END_PREFIX) {
        if let Some(rel) = html[pos..].find(COMMENT_CLOSE) {
            return Some(pos + rel + COMMENT_CLOSE.len());
        }
        search_end = pos;
    }
    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_last_marker_wins() {
        let html = "<!-- ITEM_END:1 -->a<!-- ITEM_END:2 -->b";
        let cut = find_cut_point(html).unwrap();
        assert_eq!(cut.strategy, CutStrategy::ItemMarker);
        assert_eq!(&html[..cut.index], "<!-- ITEM_END:1 -->a<!-- ITEM_END:2 -->");
    }

    #[test]
    fn test_incomplete_marker_skipped() {
        let html = "<div>a</div><!-- ITEM_END:1 -->tail<!-- ITEM_END:2";
        let cut = find_cut_point(html).unwrap();
        assert_eq!(cut.strategy, CutStrategy::ItemMarker);
        assert_eq!(&html[..cut.index], "<div>a</div><!-- ITEM_END:1 -->");
    }

    #[test]
    fn test_div_fallback() {
        let html = "<div>a</div><p>unfinished";
        let cut = find_cut_point(html).unwrap();
        assert_eq!(cut.strategy, CutStrategy::ContainerClose);
        assert_eq!(&html[..cut.index], "<div>a</div>");
    }

    #[test]
    fn test_div_fallback_case_insensitive() {
        let html = "<DIV>a</DIV>rest";
        let cut = find_cut_point(html).unwrap();
        assert_eq!(cut.index, "<DIV>a</DIV>".len());
    }

    #[test]
    fn test_no_cut_point() {
        assert!(find_cut_point("<p>just a paragraph</p>").is_none());
        assert!(find_cut_point("").is_none());
    }

    #[test]
    fn test_marker_preferred_over_later_div() {
        // The marker is authoritative even when a </div> occurs after it.
        let html = "x<!-- ITEM_END:1 --><div>y</div>";
        let cut = find_cut_point(html).unwrap();
        assert_eq!(cut.strategy, CutStrategy::ItemMarker);
        assert_eq!(&html[..cut.index], "x<!-- ITEM_END:1 -->");
    }
}
