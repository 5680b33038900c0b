//! Error handling for the loxscan driver.
//!
//! Lexical errors are not here: they are reported as diagnostics and only
//! change the exit status. These are the failures that stop the driver.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a usage or configuration problem.
pub const EX_USAGE: u8 = 64;
/// Exit status when the scanned source had lexical errors.
pub const EX_DATAERR: u8 = 65;
/// Exit status when the input file cannot be read.
pub const EX_NOINPUT: u8 = 66;
/// Exit status for an internal failure.
pub const EX_SOFTWARE: u8 = 70;
/// Exit status when writing output fails.
pub const EX_IOERR: u8 = 74;

/// Main error type for the loxscan driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    ReadSource {
        /// File that was requested.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Logging could not be set up.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Writing tokens or diagnostics failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The line editor failed.
    #[error("Prompt error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl DrvError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DrvError::Config(_) => EX_USAGE,
            DrvError::ReadSource { .. } => EX_NOINPUT,
            DrvError::Io(_) => EX_IOERR,
            DrvError::Logging(_) | DrvError::Json(_) | DrvError::Readline(_) => EX_SOFTWARE,
        }
    }
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
