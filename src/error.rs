//! Error types for tagmend operations.
//!
//! This module provides the error hierarchy using `thiserror` for engine
//! construction, file I/O, and CLI commands. Note that the engine's text
//! transformations themselves are infallible by contract: malformed input
//! produces a best-effort repaired output, never an error.

use thiserror::Error;

/// Result type alias for tagmend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for tagmend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Engine construction errors (regex compilation).
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while building the trim engine.
///
/// The built-in patterns are fixed and known-good, so these are effectively
/// unreachable at runtime; the constructor still propagates them rather than
/// panicking, per the crate-wide no-panic policy.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(String),

    /// Invalid tag configuration.
    #[error("invalid tag configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

// Implement From traits for standard library and dependency errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<regex::Error> for EngineError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Engine(EngineError::Regex(err.to_string()))
    }
}
