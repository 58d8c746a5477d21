//! Allow-listed elementary functions
//!
//! The registry is the complete set of callable functions; anything not in
//! it fails with `UnknownFunction`. All functions are element-wise over
//! per-node arrays, with scalars broadcast.

use crate::evaluator::FieldValue;
use std::collections::HashMap;

/// Function implementation signature
///
/// Argument count is validated against the definition before the
/// implementation is called.
pub type FunctionImpl = fn(Vec<FieldValue>) -> FieldValue;

/// Function definition
pub struct FunctionDef {
    /// Function name (lowercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments
    pub max_args: usize,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: HashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with the full allow-list
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };

        registry.register(FunctionDef {
            name: "abs",
            min_args: 1,
            max_args: 1,
            implementation: fn_abs,
        });
        registry.register(FunctionDef {
            name: "sqrt",
            min_args: 1,
            max_args: 1,
            implementation: fn_sqrt,
        });
        registry.register(FunctionDef {
            name: "exp",
            min_args: 1,
            max_args: 1,
            implementation: fn_exp,
        });
        registry.register(FunctionDef {
            name: "ln",
            min_args: 1,
            max_args: 1,
            implementation: fn_ln,
        });
        registry.register(FunctionDef {
            name: "min",
            min_args: 2,
            max_args: 2,
            implementation: fn_min,
        });
        registry.register(FunctionDef {
            name: "max",
            min_args: 2,
            max_args: 2,
            implementation: fn_max,
        });

        registry
    }

    /// Look up a function by (lowercase) name
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// abs(a) - absolute value, element-wise
fn fn_abs(mut args: Vec<FieldValue>) -> FieldValue {
    args.remove(0).map(f64::abs)
}

/// sqrt(a) - square root, element-wise; negative inputs yield NaN
fn fn_sqrt(mut args: Vec<FieldValue>) -> FieldValue {
    args.remove(0).map(f64::sqrt)
}

/// exp(a) - e^a, element-wise
fn fn_exp(mut args: Vec<FieldValue>) -> FieldValue {
    args.remove(0).map(f64::exp)
}

/// ln(a) - natural logarithm, element-wise
fn fn_ln(mut args: Vec<FieldValue>) -> FieldValue {
    args.remove(0).map(f64::ln)
}

/// min(a, b) - element-wise minimum of two fields
fn fn_min(mut args: Vec<FieldValue>) -> FieldValue {
    let b = args.remove(1);
    args.remove(0).zip_with(b, f64::min)
}

/// max(a, b) - element-wise maximum of two fields
fn fn_max(mut args: Vec<FieldValue>) -> FieldValue {
    let b = args.remove(1);
    args.remove(0).zip_with(b, f64::max)
}
