//! # meshpost-core
//!
//! Core data structures for the meshpost FEM post-processing library.
//!
//! This crate provides the fundamental types used throughout meshpost:
//! - [`ResultSet`] - A solver result snapshot (per-node arrays)
//! - [`ResultType`] - The selectable scalar result quantities
//! - [`FieldSet`] - Named per-node arrays a user formula evaluates over
//! - [`SummaryStats`] - Min/avg/max of a scalar field with its display unit
//! - [`ViewSettings`] - Panel state carried across sessions
//!
//! ## Example
//!
//! ```rust
//! use meshpost_core::{ResultSet, ResultType, SummaryStats};
//!
//! let result = ResultSet {
//!     node_numbers: vec![1, 2, 3],
//!     stress_values: vec![110.0, 95.0, 120.0],
//!     ..Default::default()
//! };
//! result.validate().unwrap();
//!
//! let von = result.scalar_field(ResultType::VonMises).unwrap();
//! let stats = SummaryStats::summarize(&von, ResultType::VonMises.unit()).unwrap();
//! assert_eq!(stats.max, 120.0);
//! ```

pub mod error;
pub mod field;
pub mod result;
pub mod result_type;
pub mod settings;
pub mod stats;

// Re-exports for convenience
pub use error::{Error, Result};
pub use field::FieldSet;
pub use result::ResultSet;
pub use result_type::ResultType;
pub use settings::ViewSettings;
pub use stats::{SummaryStats, STATS_TABLE_LEN};
