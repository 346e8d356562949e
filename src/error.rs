//! Error types and exit codes for commark
//!
//! Ordinary "there is no comment here" outcomes are not errors; they are
//! reported through [`crate::query::Miss`]. The variants below are either
//! caller bugs (a cursor outside the buffer) or host-level failures.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for commark operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("cursor line {line} is outside the buffer ({line_count} lines)")]
    CursorOutOfBounds { line: usize, line_count: usize },

    #[error("comment delimiters must be non-empty")]
    EmptyDelimiter,

    #[error("file too large: {} ({size} bytes, limit {limit})", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("no comment patterns registered for '{}'", path.display())]
    UnknownLanguage { path: PathBuf },

    #[error("invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code used by the CLI:
    /// - 2: caller/usage problems (bad cursor, bad delimiter, unsupported language)
    /// - 3: file and IO problems
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::CursorOutOfBounds { .. } => ExitCode::from(2),
            Self::EmptyDelimiter => ExitCode::from(2),
            Self::UnknownLanguage { .. } => ExitCode::from(2),
            Self::InvalidSize { .. } => ExitCode::from(2),
            Self::FileTooLarge { .. } => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(3),
        }
    }
}

/// Result type alias for commark operations
pub type Result<T> = std::result::Result<T, Error>;
