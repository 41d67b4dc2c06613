//! The boundary-safety and tag-repair engine.
//!
//! Sits between a long-running generative HTML producer and the client:
//! decides where a partially generated document can be truncated or merged
//! without breaking markup structure (tables especially), and repairs
//! whatever structural damage remains.
//!
//! Components, in pipeline order:
//!
//! - [`FenceStripper`]: unwraps Markdown code fences from raw model output
//! - [`Normalizer`]: collapses whitespace/line-break generation artifacts
//! - [`find_cut_point`]: locates the latest completed logical unit
//! - [`TableGuard`]: keeps cut points out of open tables
//! - [`TagBalancer`]: appends missing closing tags
//! - [`WrapperStripper`]: clears duplicate document scaffolding for merges
//! - [`TrimEngine`]: owns the above and exposes `safe_trim`/`merge_second_phase`

pub mod balance;
pub mod boundary;
pub mod config;
pub mod fence;
pub mod merge;
pub mod normalize;
pub mod table;
pub mod trim;

pub use balance::{TagBalancer, TagCounter};
pub use boundary::find_cut_point;
pub use config::{ITEM_END_PREFIX, ITEM_START_PREFIX, TagConfig};
pub use fence::FenceStripper;
pub use merge::WrapperStripper;
pub use normalize::Normalizer;
pub use table::TableGuard;
pub use trim::TrimEngine;
