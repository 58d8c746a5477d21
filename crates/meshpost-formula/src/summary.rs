//! One-shot evaluate-and-summarize entry point

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{evaluate, EvaluationContext};
use crate::parser::parse_expression;
use meshpost_core::{FieldSet, SummaryStats};

/// Evaluate a user expression over a field set and summarize the result.
///
/// The expression is parsed and evaluated with vectorized semantics; the
/// returned array has one value per node (a constant expression is broadcast
/// to every node) and the statistics are its minimum, arithmetic mean and
/// maximum, labelled with `unit`.
///
/// The field set is checked before any evaluation: it must cover at least
/// one node ([`FormulaError::EmptyInput`]) and all arrays must share that
/// length ([`FormulaError::LengthMismatch`]). A failed evaluation therefore
/// never produces a partial result.
///
/// # Example
///
/// ```rust
/// use meshpost_core::FieldSet;
/// use meshpost_formula::evaluate_summary;
///
/// let mut fields = FieldSet::new();
/// fields.insert("P1", vec![1.0, 2.0, 3.0]).unwrap();
/// fields.insert("P3", vec![0.0, 1.0, 1.0]).unwrap();
///
/// let (values, stats) = evaluate_summary(&fields, "(P1 - P3) / 2", "MPa").unwrap();
/// assert_eq!(values, vec![0.5, 0.5, 1.0]);
/// assert_eq!((stats.min, stats.max), (0.5, 1.0));
/// ```
pub fn evaluate_summary(
    fields: &FieldSet,
    expression: &str,
    unit: &'static str,
) -> FormulaResult<(Vec<f64>, SummaryStats)> {
    let n = fields.node_count();
    if n == 0 {
        return Err(FormulaError::EmptyInput);
    }
    // FieldSet::insert already guarantees equal lengths; this re-check only
    // guards against future FieldSet constructors that might not
    for name in fields.names() {
        let len = fields.get(name).map_or(0, <[f64]>::len);
        if len != n {
            return Err(FormulaError::LengthMismatch {
                expected: n,
                actual: len,
            });
        }
    }

    let ast = parse_expression(expression)?;
    let ctx = EvaluationContext::new(fields);
    let values = evaluate(&ast, &ctx)?.into_array(n);

    // n >= 1, so the average is well defined
    let stats = SummaryStats::summarize(&values, unit)
        .map_err(|_| FormulaError::EmptyInput)?;

    Ok((values, stats))
}
