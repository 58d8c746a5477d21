//! Error types for meshpost-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in meshpost-core
#[derive(Debug, Error)]
pub enum Error {
    /// Array length inconsistent with the rest of the result set
    #[error("Field '{field}' has {actual} values, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Result set has no nodes
    #[error("Result set is empty")]
    EmptyResult,

    /// Requested scalar field has no data in this result set
    #[error("No data for result type {0}")]
    MissingField(&'static str),

    /// Unrecognized result type name
    #[error("Unknown result type: {0}")]
    UnknownResultType(String),
}
