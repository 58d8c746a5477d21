//! Field expression evaluator
//!
//! Evaluates expression ASTs with vectorized semantics: operators apply
//! element-wise across per-node arrays, and scalar constants broadcast to
//! every node.

use crate::ast::{BinaryOperator, FieldExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::FunctionRegistry;
use meshpost_core::FieldSet;
use std::sync::OnceLock;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Value types during expression evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A constant, identical at every node
    Scalar(f64),
    /// One value per node
    Array(Vec<f64>),
}

impl FieldValue {
    /// Materialize the per-node array, broadcasting a scalar to length `n`
    pub fn into_array(self, n: usize) -> Vec<f64> {
        match self {
            FieldValue::Scalar(v) => vec![v; n],
            FieldValue::Array(values) => values,
        }
    }

    /// Apply a unary function element-wise
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> FieldValue {
        match self {
            FieldValue::Scalar(v) => FieldValue::Scalar(f(v)),
            FieldValue::Array(values) => {
                FieldValue::Array(values.into_iter().map(f).collect())
            }
        }
    }

    /// Combine two values element-wise with scalar broadcast.
    ///
    /// Array operands always have equal length here because every array in
    /// an expression originates from one validated field set.
    pub fn zip_with<F: Fn(f64, f64) -> f64>(self, other: FieldValue, f: F) -> FieldValue {
        match (self, other) {
            (FieldValue::Scalar(a), FieldValue::Scalar(b)) => FieldValue::Scalar(f(a, b)),
            (FieldValue::Scalar(a), FieldValue::Array(bs)) => {
                FieldValue::Array(bs.into_iter().map(|b| f(a, b)).collect())
            }
            (FieldValue::Array(xs), FieldValue::Scalar(b)) => {
                FieldValue::Array(xs.into_iter().map(|a| f(a, b)).collect())
            }
            (FieldValue::Array(xs), FieldValue::Array(bs)) => FieldValue::Array(
                xs.into_iter().zip(bs).map(|(a, b)| f(a, b)).collect(),
            ),
        }
    }
}

/// Context for expression evaluation
pub struct EvaluationContext<'a> {
    fields: &'a FieldSet,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context over a field set
    pub fn new(fields: &'a FieldSet) -> Self {
        Self { fields }
    }

    /// Number of nodes in the field set
    pub fn node_count(&self) -> usize {
        self.fields.node_count()
    }

    /// Resolve a field reference to its array
    pub fn get_field(&self, name: &str) -> FormulaResult<FieldValue> {
        self.fields
            .get(name)
            .map(|values| FieldValue::Array(values.to_vec()))
            .ok_or_else(|| FormulaError::UnknownField(name.to_string()))
    }
}

/// Evaluate an expression over a field set
pub fn evaluate(expr: &FieldExpr, ctx: &EvaluationContext) -> FormulaResult<FieldValue> {
    match expr {
        FieldExpr::Number(n) => Ok(FieldValue::Scalar(*n)),

        FieldExpr::FieldRef(name) => ctx.get_field(name),

        FieldExpr::BinaryOp { op, left, right } => {
            let left = evaluate(left, ctx)?;
            let right = evaluate(right, ctx)?;
            Ok(apply_binary_op(*op, left, right))
        }

        FieldExpr::UnaryOp { op, operand } => {
            let operand = evaluate(operand, ctx)?;
            Ok(match op {
                UnaryOperator::Negate => operand.map(|v| -v),
            })
        }

        FieldExpr::Function { name, args } => evaluate_function(name, args, ctx),
    }
}

fn apply_binary_op(op: BinaryOperator, left: FieldValue, right: FieldValue) -> FieldValue {
    match op {
        BinaryOperator::Add => left.zip_with(right, |a, b| a + b),
        BinaryOperator::Subtract => left.zip_with(right, |a, b| a - b),
        BinaryOperator::Multiply => left.zip_with(right, |a, b| a * b),
        // Division by zero follows IEEE 754 (inf/NaN), as the per-node
        // arrays themselves may contain either
        BinaryOperator::Divide => left.zip_with(right, |a, b| a / b),
        BinaryOperator::Power => left.zip_with(right, |a, b| a.powf(b)),
    }
}

fn evaluate_function(
    name: &str,
    args: &[FieldExpr],
    ctx: &EvaluationContext,
) -> FormulaResult<FieldValue> {
    let registry = get_function_registry();

    let def = registry
        .get(name)
        .ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    // Check argument count before evaluating arguments
    if args.len() < def.min_args || args.len() > def.max_args {
        let expected = if def.min_args == def.max_args {
            def.min_args.to_string()
        } else {
            format!("{}-{}", def.min_args, def.max_args)
        };
        return Err(FormulaError::ArgumentCount {
            function: def.name.to_string(),
            expected,
            actual: args.len(),
        });
    }

    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(evaluate(arg, ctx)?);
    }

    Ok((def.implementation)(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;
    use pretty_assertions::assert_eq;

    fn fields() -> FieldSet {
        let mut fields = FieldSet::new();
        fields.insert("P1", vec![1.0, 2.0, 3.0]).unwrap();
        fields.insert("P3", vec![0.0, 1.0, 1.0]).unwrap();
        fields.insert("T", vec![293.0, 300.0, 310.0]).unwrap();
        fields
    }

    fn eval(expr: &str, fields: &FieldSet) -> FormulaResult<FieldValue> {
        let ast = parse_expression(expr)?;
        evaluate(&ast, &EvaluationContext::new(fields))
    }

    #[test]
    fn test_scalar_arithmetic() {
        let fields = fields();
        assert_eq!(eval("1+2*3", &fields).unwrap(), FieldValue::Scalar(7.0));
        assert_eq!(eval("2^10", &fields).unwrap(), FieldValue::Scalar(1024.0));
        assert_eq!(eval("-(1+2)", &fields).unwrap(), FieldValue::Scalar(-3.0));
        // Unary minus binds tighter than the power operator
        assert_eq!(eval("-2^2", &fields).unwrap(), FieldValue::Scalar(4.0));
        assert_eq!(eval("-(2^2)", &fields).unwrap(), FieldValue::Scalar(-4.0));
    }

    #[test]
    fn test_field_identity() {
        let fields = fields();
        assert_eq!(
            eval("P1", &fields).unwrap(),
            FieldValue::Array(vec![1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn test_elementwise_ops() {
        let fields = fields();
        assert_eq!(
            eval("P1 + P3", &fields).unwrap(),
            FieldValue::Array(vec![1.0, 3.0, 4.0])
        );
        assert_eq!(
            eval("P1 * P3", &fields).unwrap(),
            FieldValue::Array(vec![0.0, 2.0, 3.0])
        );
    }

    #[test]
    fn test_scalar_broadcast() {
        let fields = fields();
        assert_eq!(
            eval("2 * P1", &fields).unwrap(),
            FieldValue::Array(vec![2.0, 4.0, 6.0])
        );
        assert_eq!(
            eval("T - 273.0", &fields).unwrap(),
            FieldValue::Array(vec![20.0, 27.0, 37.0])
        );
    }

    #[test]
    fn test_mean_stress_formula() {
        let fields = fields();
        assert_eq!(
            eval("(P1 - P3) / 2", &fields).unwrap(),
            FieldValue::Array(vec![0.5, 0.5, 1.0])
        );
    }

    #[test]
    fn test_unknown_field() {
        let fields = fields();
        match eval("P1 + Bogus", &fields) {
            Err(FormulaError::UnknownField(name)) => assert_eq!(name, "Bogus"),
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn test_functions() {
        let fields = fields();
        assert_eq!(
            eval("abs(P3 - P1)", &fields).unwrap(),
            FieldValue::Array(vec![1.0, 1.0, 2.0])
        );
        assert_eq!(
            eval("sqrt(P1 * P1)", &fields).unwrap(),
            FieldValue::Array(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            eval("max(P1, 2)", &fields).unwrap(),
            FieldValue::Array(vec![2.0, 2.0, 3.0])
        );
        assert_eq!(
            eval("min(P1, P3)", &fields).unwrap(),
            FieldValue::Array(vec![0.0, 1.0, 1.0])
        );
    }

    #[test]
    fn test_unknown_function() {
        let fields = fields();
        assert!(matches!(
            eval("system(P1)", &fields),
            Err(FormulaError::UnknownFunction(_))
        ));
        // A function call is never silently treated as a field reference
        assert!(matches!(
            eval("open(1)", &fields),
            Err(FormulaError::UnknownFunction(_))
        ));
    }

    #[test]
    fn test_argument_count() {
        let fields = fields();
        match eval("sqrt(P1, P3)", &fields) {
            Err(FormulaError::ArgumentCount {
                function, actual, ..
            }) => {
                assert_eq!(function, "sqrt");
                assert_eq!(actual, 2);
            }
            other => panic!("expected ArgumentCount, got {other:?}"),
        }
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let fields = fields();
        // P3 starts with 0.0; the quotient is inf there, not an error
        let FieldValue::Array(values) = eval("P1 / P3", &fields).unwrap() else {
            panic!("expected array");
        };
        assert!(values[0].is_infinite());
        assert_eq!(values[1], 2.0);
    }
}
