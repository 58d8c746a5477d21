//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing or evaluating a field expression
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Expression does not parse as an arithmetic formula
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Expression references a field that is not in the field set
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Expression uses a construct outside the arithmetic allow-list
    #[error("Operation not allowed in field expressions: {0}")]
    DisallowedOperation(String),

    /// Function name not in the allow-list
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Field set has no nodes; statistics are undefined
    #[error("Cannot evaluate over an empty field set")]
    EmptyInput,

    /// Arrays in the field set have differing lengths
    #[error("Field length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
