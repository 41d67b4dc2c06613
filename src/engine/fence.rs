//! Fenced-code-block stripping.
//!
//! Generative models habitually wrap HTML output in a Markdown code fence.
//! The stripper unwraps the fenced interior before any structural work.

use crate::error::Result;
use regex::Regex;

/// Strips Markdown code fences from raw model output.
///
/// Preference order: an explicitly `html`-labeled fence, then any fence,
/// then the input itself. Absence of a fence is not an error.
///
/// # Examples
///
/// ```
/// use tagmend_rs::engine::FenceStripper;
///
/// let stripper = FenceStripper::new().unwrap();
/// assert_eq!(stripper.strip("```html\n<div>A</div>\n```"), "<div>A</div>");
/// assert_eq!(stripper.strip("<p>plain</p>"), "<p>plain</p>");
/// ```
#[derive(Debug)]
pub struct FenceStripper {
    /// Fence explicitly labeled as HTML.
    html_fence: Regex,
    /// Any fence, with an optional language label.
    any_fence: Regex,
}

impl FenceStripper {
    /// Compiles the fence patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            html_fence: Regex::new(r"(?si)```html\s*(.*?)```")?,
            any_fence: Regex::new(r"(?s)```[\w-]*\s*(.*?)```")?,
        })
    }

    /// Returns the fenced interior if any, trimmed; else the trimmed input.
    #[must_use]
    pub fn strip(&self, raw: &str) -> String {
        if let Some(caps) = self.html_fence.captures(raw) {
            return caps[1].trim().to_string();
        }
        if let Some(caps) = self.any_fence.captures(raw) {
            return caps[1].trim().to_string();
        }
        raw.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn stripper() -> FenceStripper {
        FenceStripper::new().unwrap()
    }

    #[test]
    fn test_html_fence() {
        let out = stripper().strip("```html\n<div>A</div>\n```");
        assert_eq!(out, "<div>A</div>");
    }

    #[test]
    fn test_html_fence_preferred_over_plain() {
        let raw = "```\nignored\n```\n```html\n<p>kept</p>\n```";
        assert_eq!(stripper().strip(raw), "<p>kept</p>");
    }

    #[test]
    fn test_plain_fence() {
        let out = stripper().strip("```\n<table><tr><td>x</td></tr></table>\n```");
        assert_eq!(out, "<table><tr><td>x</td></tr></table>");
    }

    #[test]
    fn test_labeled_non_html_fence() {
        let out = stripper().strip("```xml\n<root/>\n```");
        assert_eq!(out, "<root/>");
    }

    #[test]
    fn test_no_fence_passthrough() {
        assert_eq!(stripper().strip("  <div>hello</div>\n"), "<div>hello</div>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(stripper().strip(""), "");
    }

    #[test]
    fn test_unterminated_fence_passthrough() {
        // A fence that never closes is left alone; the caller repairs later.
        let raw = "```html\n<div>open";
        assert_eq!(stripper().strip(raw), raw.trim());
    }
}
