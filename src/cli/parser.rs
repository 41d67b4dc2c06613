//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tagmend-rs: boundary-safe truncation and tag repair for streamed HTML.
///
/// A CLI harness around the pure trim engine: truncate a captured stream
/// buffer at the latest completed boundary, merge generation phases, and
/// inspect tag balance.
#[derive(Parser, Debug)]
#[command(name = "tagmend-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Safely truncate a stream buffer and repair tag balance.
    ///
    /// Reads FILE, or stdin when omitted. Prints the repaired HTML; with
    /// `--format json`, the full trim outcome.
    Trim {
        /// Path to the captured buffer (stdin if not provided).
        file: Option<PathBuf>,

        /// Write the repaired HTML to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge a raw second-phase fragment onto a finalized first phase.
    Merge {
        /// Path to the finalized first-phase output.
        first: PathBuf,

        /// Path to the raw second-phase fragment (stdin if not provided).
        second: Option<PathBuf>,

        /// Write the merged HTML to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Strip code fences and normalize whitespace artifacts only.
    Normalize {
        /// Path to the buffer (stdin if not provided).
        file: Option<PathBuf>,
    },

    /// Report per-tag balance counts and open-table status.
    Check {
        /// Path to the buffer (stdin if not provided).
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]

    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_parse() {
        // Test that CLI can be created
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trim_args() {
        let cli = Cli::parse_from(["tagmend-rs", "trim", "buf.html", "-o", "out.html"]);
        match cli.command {
            Commands::Trim { file, output } => {
                assert_eq!(file, Some(PathBuf::from("buf.html")));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            _ => panic!("expected trim command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["tagmend-rs", "check", "--format", "json"]);
        assert_eq!(cli.format, "json");
    }
}
