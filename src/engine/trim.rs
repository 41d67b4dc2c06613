//! Top-level orchestration: safe trim and phase merge.
//!
//! Pipeline: fence strip → normalize → locate cut point → guard/relocate →
//! truncate → balance repair. Every pass is pure and recomputes from the
//! full buffer, so repeated invocation on a growing stream is safe and
//! concurrent sessions never interact.

use crate::core::{BalanceReport, TrimOutcome};
use crate::engine::balance::TagBalancer;
use crate::engine::boundary::find_cut_point;
use crate::engine::config::TagConfig;
use crate::engine::fence::FenceStripper;
use crate::engine::merge::WrapperStripper;
use crate::engine::normalize::Normalizer;
use crate::engine::table::TableGuard;
use crate::error::Result;
use crate::io::find_char_boundary;

/// The streaming boundary-safety and tag-repair engine.
///
/// Construction compiles the fixed pattern set once; all transformation
/// methods take `&self`, never fail, and share no mutable state.
///
/// # Examples
///
/// ```
/// use tagmend_rs::engine::TrimEngine;
///
/// let engine = TrimEngine::new().unwrap();
/// let out = engine.safe_trim("<div>hello<!-- ITEM_END:1 --> world<table><tr><td>x");
/// assert_eq!(out.html, "<div>hello<!-- ITEM_END:1 --></div>");
/// ```
#[derive(Debug)]
pub struct TrimEngine {
    config: TagConfig,
    fence: FenceStripper,
    normalizer: Normalizer,
    guard: TableGuard,
    balancer: TagBalancer,
    wrapper: WrapperStripper,
}

impl TrimEngine {
    /// Creates an engine with the default tag vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if pattern compilation
    /// fails.
    pub fn new() -> Result<Self> {
        Self::with_config(TagConfig::new())
    }

    /// Creates an engine with a custom tag configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Regex`] if pattern compilation
    /// fails.
    pub fn with_config(config: TagConfig) -> Result<Self> {
        Ok(Self {
            fence: FenceStripper::new()?,
            normalizer: Normalizer::new()?,
            guard: TableGuard::new(&config)?,
            balancer: TagBalancer::new(&config)?,
            wrapper: WrapperStripper::new()?,
            config,
        })
    }

    /// The tag configuration this engine tracks.
    #[must_use]
    pub const fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Truncates a stream buffer at the latest completed boundary and
    /// repairs tag balance.
    ///
    /// When no cut point exists the buffer is kept whole; repair still runs
    /// so an in-progress fragment is always structurally closed.
    #[must_use]
    pub fn safe_trim(&self, raw: &str) -> TrimOutcome {
        let text = self.fence.strip(raw);
        let mut text = self.normalizer.normalize(&text);

        let cut = find_cut_point(&text);
        let mut cut_index = None;
        let mut relocated = false;
        if let Some(point) = cut {
            if point.index < text.len() {
                let mut index = point.index;
                if self.guard.is_inside_unclosed_table(&text, index) {
                    index = self.guard.relocate_cut(&text, index);
                    relocated = true;
                }
                text.truncate(find_char_boundary(&text, index));
                cut_index = Some(text.len());
            }
        }

        let appended = self.balancer.missing_closers(&text);
        let html = self.balancer.repair(&text);
        TrimOutcome {
            html,
            cut_index,
            strategy: cut.map(|point| point.strategy),
            relocated,
            appended,
        }
    }

    /// Merges a raw second-phase fragment onto a finalized first phase.
    ///
    /// The fragment is fence-stripped and cleared of duplicate document
    /// scaffolding, concatenated after `first`, then normalized and
    /// repaired. The result is itself a valid input to this pipeline.
    #[must_use]
    pub fn merge_second_phase(&self, first: &str, fragment: &str) -> String {
        let fragment = self.fence.strip(fragment);
        let fragment = self.wrapper.strip(&fragment);
        let joined = format!("{first}{fragment}");
        let normalized = self.normalizer.normalize(&joined);
        self.balancer.repair(&normalized)
    }

    /// Fence-strips and normalizes without truncation or repair.
    #[must_use]
    pub fn normalize_only(&self, raw: &str) -> String {
        self.normalizer.normalize(&self.fence.strip(raw))
    }

    /// Per-tag balance counts and the open-table verdict for `html`.
    #[must_use]
    pub fn balance_report(&self, html: &str) -> BalanceReport {
        BalanceReport {
            tags: self.balancer.report(html),
            inside_open_table: self.guard.is_inside_unclosed_table(html, html.len()),
        }
    }
}
