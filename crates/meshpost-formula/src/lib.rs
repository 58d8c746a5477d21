//! # meshpost-formula
//!
//! Safe field-expression parser and evaluator for meshpost.
//!
//! This crate provides:
//! - Expression parsing (text → AST) restricted to arithmetic over named fields
//! - Vectorized evaluation (AST → per-node array) with scalar broadcast
//! - A closed allow-list of elementary functions
//! - Min/avg/max summarization of the evaluated array
//!
//! Expressions come from interactive users, so the grammar is a deliberate
//! security boundary: no assignment, no control flow, no member access and no
//! function calls outside the allow-list are representable. Anything else is
//! rejected as a distinguishable [`FormulaError::DisallowedOperation`].
//!
//! ## Example
//!
//! ```rust
//! use meshpost_core::FieldSet;
//! use meshpost_formula::evaluate_summary;
//!
//! let mut fields = FieldSet::new();
//! fields.insert("Von", vec![120.0, 80.0, 100.0]).unwrap();
//!
//! let (values, stats) = evaluate_summary(&fields, "Von / 2", "MPa").unwrap();
//! assert_eq!(values, vec![60.0, 40.0, 50.0]);
//! assert_eq!(stats.max, 60.0);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod summary;

pub use ast::{BinaryOperator, FieldExpr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, EvaluationContext, FieldValue};
pub use parser::parse_expression;
pub use summary::evaluate_summary;
