//! Tag vocabulary and sentinel marker configuration.
//!
//! The engine tracks a fixed, small set of container and table-family tags.
//! The set lives in an immutable [`TagConfig`] constructed once and shared by
//! every component; there is no process-wide mutable state.

/// Prefix of the sentinel comment opening a logical content unit.
pub const ITEM_START_PREFIX: &str = "<!-- ITEM_START:";

/// Prefix of the sentinel comment closing a logical content unit.
///
/// The generator only emits this after the unit's nested structure is fully
/// closed, which is what makes the marker a safe truncation boundary.
pub const ITEM_END_PREFIX: &str = "<!-- ITEM_END:";

/// Closing delimiter of an HTML comment.
pub const COMMENT_CLOSE: &str = "-->";

/// Container tags closed last during repair.
pub const DEFAULT_CONTAINER_TAGS: &[&str] = &["div"];

/// Table-family subtags, listed innermost-first so appended closers nest
/// correctly: cells, then rows, then sections.
pub const DEFAULT_TABLE_SUBTAGS: &[&str] = &["td", "th", "tr", "tbody", "thead", "tfoot"];

/// The table tag itself.
pub const TABLE_TAG: &str = "table";

/// Immutable tag vocabulary tracked by the engine.
///
/// # Examples
///
/// ```
/// use tagmend_rs::engine::TagConfig;
///
/// let config = TagConfig::new();
/// assert_eq!(config.table_tag, "table");
/// assert!(config.container_tags.contains(&"div"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Outermost container tags (closed after the table family).
    pub container_tags: &'static [&'static str],
    /// Table-family subtags in closing order (innermost first).
    pub table_subtags: &'static [&'static str],
    /// The table tag name.
    pub table_tag: &'static str,
}

impl TagConfig {
    /// Creates the default tag configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container_tags: DEFAULT_CONTAINER_TAGS,
            table_subtags: DEFAULT_TABLE_SUBTAGS,
            table_tag: TABLE_TAG,
        }
    }

    /// Iterates every tracked tag in repair order: subtags, table, containers.
    pub fn tags_in_repair_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table_subtags
            .iter()
            .copied()
            .chain(std::iter::once(self.table_tag))
            .chain(self.container_tags.iter().copied())
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self::new()
    }
}
