//! CLI command implementations.
//!
//! Contains the business logic for each CLI command. Every command reads
//! its buffer from a file argument or stdin, runs the pure engine, and
//! returns a formatted string for the binary to print.

use crate::cli::output::{
    OutputFormat, format_check, format_merge, format_trim, format_written,
};
use crate::cli::parser::{Cli, Commands};
use crate::engine::TrimEngine;
use crate::error::{CommandError, Result};
use crate::io::{read_file, write_file};
use std::io::Read;
use std::path::Path;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if input cannot be read, output cannot be written, or
/// the engine fails to build.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let engine = TrimEngine::new()?;

    match &cli.command {
        Commands::Trim { file, output } => {
            cmd_trim(&engine, file.as_deref(), output.as_deref(), format)
        }
        Commands::Merge {
            first,
            second,
            output,
        } => cmd_merge(&engine, first, second.as_deref(), output.as_deref(), format),
        Commands::Normalize { file } => cmd_normalize(&engine, file.as_deref()),
        Commands::Check { file } => cmd_check(&engine, file.as_deref(), cli.verbose, format),
    }
}

/// Reads the input buffer from a file, or stdin when no path is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_file(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map_err(|e| {
                CommandError::ExecutionFailed(format!("Failed to read from stdin: {e}"))
            })?;
            Ok(buffer)
        }
    }
}

fn cmd_trim(
    engine: &TrimEngine,
    file: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let raw = read_input(file)?;
    let outcome = engine.safe_trim(&raw);

    if let Some(path) = output {
        write_file(path, &outcome.html)?;
        return Ok(format_written(
            &path.to_string_lossy(),
            outcome.html.len(),
            format,
        ));
    }
    Ok(format_trim(&outcome, format))
}

fn cmd_merge(
    engine: &TrimEngine,
    first: &Path,
    second: Option<&Path>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<String> {
    let first_html = read_file(first)?;
    let fragment = read_input(second)?;
    let merged = engine.merge_second_phase(&first_html, &fragment);

    if let Some(path) = output {
        write_file(path, &merged)?;
        return Ok(format_written(
            &path.to_string_lossy(),
            merged.len(),
            format,
        ));
    }
    Ok(format_merge(&merged, format))
}

fn cmd_normalize(engine: &TrimEngine, file: Option<&Path>) -> Result<String> {
    let raw = read_input(file)?;
    Ok(engine.normalize_only(&raw))
}

fn cmd_check(
    engine: &TrimEngine,
    file: Option<&Path>,
    verbose: bool,
    format: OutputFormat,
) -> Result<String> {
    let raw = read_input(file)?;
    let report = engine.balance_report(&raw);
    let preview = verbose.then_some(raw.as_str());
    Ok(format_check(&report, preview, format))
}
