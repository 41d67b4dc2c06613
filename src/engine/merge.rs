//! Second-phase fragment cleanup for phase merging.
//!
//! A continuation request re-emits document scaffolding the first phase
//! already carries: `<html>`/`<body>` wrappers, a doctype, and a `<head>`
//! with an embedded `<style>` block. The wrapper stripper removes all of
//! it so the fragment concatenates cleanly onto the finalized first phase.

use crate::error::Result;
use regex::Regex;

/// Strips duplicate document-level scaffolding from a raw fragment.
#[derive(Debug)]
pub struct WrapperStripper {
    style_block: Regex,
    head_block: Regex,
    wrapper_tags: Regex,
}

impl WrapperStripper {
    /// Compiles the wrapper patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if compilation fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            style_block: Regex::new(r"(?is)<style[^>]*>.*?</style>")?,
            head_block: Regex::new(r"(?is)<head[^>]*>.*?</head>")?,
            wrapper_tags: Regex::new(r"(?i)<!doctype[^>]*>|</?html[^>]*>|</?body[^>]*>")?,
        })
    }

    /// Removes head/style blocks and root/body wrapper tags, then trims.
    #[must_use]
    pub fn strip(&self, fragment: &str) -> String {
        let text = self.head_block.replace_all(fragment, "");
        let text = self.style_block.replace_all(&text, "");
        self.wrapper_tags.replace_all(&text, "").trim().to_string()
    }
}
