//! Error types for the panel layer

use thiserror::Error;

/// Result type alias using [`PanelError`]
pub type PanelResult<T> = std::result::Result<T, PanelError>;

/// Errors surfaced by the result panel
#[derive(Debug, Error)]
pub enum PanelError {
    /// Result set or field problem
    #[error(transparent)]
    Core(#[from] meshpost_core::Error),

    /// User formula problem
    #[error(transparent)]
    Formula(#[from] meshpost_formula::FormulaError),
}
