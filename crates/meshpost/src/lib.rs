//! # meshpost
//!
//! Headless FEM result post-processing.
//!
//! Meshpost takes a solver result snapshot and provides everything the
//! post-processing settings panel of a CAD application needs, minus the
//! widgets: selecting which scalar field to paint onto the mesh, scaling the
//! displayed displacement, min/avg/max statistics, and safe evaluation of
//! user-typed formulas over the per-node field arrays.
//!
//! ## Example
//!
//! ```rust
//! use meshpost::prelude::*;
//!
//! let result = ResultSet {
//!     node_numbers: vec![1, 2, 3],
//!     stress_values: vec![110.0, 95.0, 120.0],
//!     principal_max: vec![130.0, 100.0, 140.0],
//!     principal_min: vec![-10.0, -5.0, -20.0],
//!     ..Default::default()
//! };
//!
//! let mut panel = ResultPanel::open(result, ViewSettings::default(), NullView).unwrap();
//!
//! // Paint von Mises stress and read its statistics
//! let stats = panel.select(ResultType::VonMises).unwrap();
//! assert_eq!(stats.max, 120.0);
//!
//! // Evaluate a user formula over the named fields
//! let stats = panel.apply_formula("(P1 - P3) / 2").unwrap();
//! assert_eq!(stats.max, 80.0);
//!
//! // Closing hands the settings back for persistence
//! let settings = panel.close();
//! assert_eq!(settings.result_type, ResultType::UserDefined);
//! ```

pub mod error;
pub mod panel;
pub mod prelude;
pub mod view;

// Re-export panel types
pub use error::{PanelError, PanelResult};
pub use panel::ResultPanel;
pub use view::{MeshView, NullView};

// Re-export core types
pub use meshpost_core::{
    Error as CoreError, FieldSet, ResultSet, ResultType, SummaryStats, ViewSettings,
    STATS_TABLE_LEN,
};

// Re-export formula types
pub use meshpost_formula::{
    evaluate, evaluate_summary, parse_expression, EvaluationContext, FieldExpr, FieldValue,
    FormulaError, FormulaResult,
};
