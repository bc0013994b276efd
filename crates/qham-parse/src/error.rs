//! Error types for Hamiltonian parsing and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Per-line parse failures.
///
/// Both variants carry the offending line verbatim for diagnostics. The
/// loader absorbs these — a malformed line is reported and skipped, never
/// fatal to the remaining scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// No coefficient of the form `(<re>+0j)` anywhere in the line.
    #[error("no coefficient of the form (<re>+0j) in line: {line}")]
    MalformedCoefficient {
        /// The line that failed to parse.
        line: String,
    },

    /// No bracketed operator spec `[<P><q> ...]` anywhere in the line.
    #[error("no operator spec of the form [<P><q> ...] in line: {line}")]
    MalformedOperatorSpec {
        /// The line that failed to parse.
        line: String,
    },
}

/// Result type for line parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors escalated by the loader.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The source file could not be opened or read.
    #[error("cannot read Hamiltonian file {}: {source}", path.display())]
    UnreadableFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
