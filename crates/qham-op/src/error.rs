//! Error types for the operator crate.

use thiserror::Error;

/// Errors produced by operator construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpError {
    /// Character is not a Pauli label.
    #[error("invalid Pauli label '{0}' (expected X, Y, or Z)")]
    InvalidPauli(char),
}

/// Result type for operator construction.
pub type OpResult<T> = Result<T, OpError>;
