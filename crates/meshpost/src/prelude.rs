//! Convenient glob import for common meshpost types
//!
//! ```rust
//! use meshpost::prelude::*;
//! ```

pub use crate::error::{PanelError, PanelResult};
pub use crate::panel::ResultPanel;
pub use crate::view::{MeshView, NullView};
pub use meshpost_core::{FieldSet, ResultSet, ResultType, SummaryStats, ViewSettings};
pub use meshpost_formula::{evaluate_summary, parse_expression, FormulaError};
