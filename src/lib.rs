//! # tagmend-rs
//!
//! Streaming-output boundary-safety and tag-repair engine for
//! LLM-generated HTML reports.
//!
//! A generative producer streams a report as HTML fragments; at arbitrary
//! cut points the accumulated buffer may end mid-element, and a table left
//! open at the end of a response visually absorbs whatever the client
//! appends next. tagmend decides where the buffer can be safely truncated
//! (sentinel `ITEM_END` comments, with a conservative structural fallback),
//! keeps cut points out of open tables, appends the missing closing tags,
//! and merges multi-phase generations into one structurally closed document.
//!
//! ## Features
//!
//! - **Safe trim**: truncate at the latest completed logical unit, never
//!   inside an open table
//! - **Tag repair**: idempotent balance repair for a fixed container and
//!   table-family vocabulary
//! - **Phase merge**: join a continuation fragment onto finalized output,
//!   stripping duplicate document scaffolding
//! - **Pure and stateless**: every operation is a string-in/string-out
//!   function; concurrent streaming sessions never interact

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{BalanceReport, CutPoint, CutStrategy, TagBalance, TrimOutcome};

// Re-export engine types
pub use engine::{
    FenceStripper, Normalizer, TableGuard, TagBalancer, TagConfig, TrimEngine, WrapperStripper,
    find_cut_point,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};

// Re-export I/O helpers
pub use io::{FileReader, find_char_boundary, read_file, write_file};
