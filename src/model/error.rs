//! Error types for the application.
//!
//! A small hierarchy built with `thiserror`: all domain failures compose
//! into [`AppError`] via `From`, so the `?` operator works everywhere.
//!
//! Parse errors are non-fatal: a malformed record line is logged and
//! skipped, and the dashboard keeps working with the valid subset. Input
//! and terminal errors are fatal and propagate to the top-level handler.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read records from the backing store. Fatal: without a
    /// data source there is nothing to show.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to parse a record line. Non-fatal at the stream level; this
    /// variant only surfaces when a caller asks for strict parsing.
    #[error("Failed to parse record: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or TUI rendering error. Fatal: without a working terminal
    /// the dashboard cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from a file or other store.
///
/// Specific failure modes are kept apart (file missing vs generic I/O)
/// so error messages can point at the actual problem.
#[derive(Debug, Error)]
pub enum InputError {
    /// The records file does not exist at the given path.
    #[error("Records file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure while reading the records file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Neither a records file nor the demo dataset was requested.
    #[error("No input source: provide a records file path or pass --demo")]
    NoInput,
}

/// Errors describing why a single record line could not be parsed.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The line is not valid JSON, or is JSON of the wrong shape.
    #[error("line {line}: {reason}")]
    Json {
        /// 1-indexed line number in the records file.
        line: usize,
        /// Parser-provided reason.
        reason: String,
    },

    /// A required field was present but empty.
    #[error("line {line}: field '{field}' is empty")]
    EmptyField {
        /// 1-indexed line number in the records file.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
    },
}
