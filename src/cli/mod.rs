//! CLI layer for tagmend.
//!
//! Provides the command-line interface using clap, with commands for
//! trimming stream buffers, merging generation phases, normalizing, and
//! inspecting tag balance.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
