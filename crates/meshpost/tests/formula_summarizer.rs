//! End-to-end tests for user-formula evaluation and summarization

use meshpost::prelude::*;

fn fields() -> FieldSet {
    let mut fields = FieldSet::new();
    fields.insert("P1", vec![1.0, 2.0, 3.0]).unwrap();
    fields.insert("P3", vec![0.0, 1.0, 1.0]).unwrap();
    fields.insert("Von", vec![50.0, 75.0, 100.0]).unwrap();
    fields
}

/// The worked example: (P1 - P3) / 2 over three nodes
#[test]
fn test_worked_example() {
    let (values, stats) = evaluate_summary(&fields(), "(P1 - P3) / 2", "MPa").unwrap();
    assert_eq!(values, vec![0.5, 0.5, 1.0]);
    assert_eq!(stats.min, 0.5);
    assert!((stats.avg - 0.6666667).abs() < 1e-6);
    assert_eq!(stats.max, 1.0);
    assert_eq!(stats.unit, "MPa");
}

/// A bare field name is the identity: values equal the field itself
#[test]
fn test_field_identity() {
    let fields = fields();
    let (values, stats) = evaluate_summary(&fields, "Von", "MPa").unwrap();
    assert_eq!(values.as_slice(), fields.get("Von").unwrap());
    assert_eq!((stats.min, stats.avg, stats.max), (50.0, 75.0, 100.0));
}

/// Element-wise sums and exact arithmetic mean
#[test]
fn test_addition_is_elementwise() {
    let (values, stats) = evaluate_summary(&fields(), "P1 + P3", "").unwrap();
    assert_eq!(values, vec![1.0, 3.0, 4.0]);
    assert!((stats.avg - (1.0 + 3.0 + 4.0) / 3.0).abs() < 1e-12);
}

/// Unknown names fail loudly, never as a silent zero
#[test]
fn test_unknown_field() {
    match evaluate_summary(&fields(), "P1 + Sigma", "") {
        Err(FormulaError::UnknownField(name)) => assert_eq!(name, "Sigma"),
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

/// Constructs outside the arithmetic subset are rejected as disallowed,
/// distinguishable from a plain syntax error
#[test]
fn test_disallowed_constructs() {
    for expr in [
        "__import__('os')",
        "P1.__class__",
        "x = P1",
        "P1 if True else P3",
        "[v for v in P1]",
        "P1 > P3",
    ] {
        match evaluate_summary(&fields(), expr, "") {
            Err(FormulaError::DisallowedOperation(_)) => {}
            other => panic!("{expr}: expected DisallowedOperation, got {other:?}"),
        }
    }
}

/// Unknown function names are refused, not looked up anywhere else
#[test]
fn test_function_allow_list_is_closed() {
    for expr in ["eval(P1)", "getattr(P1, 0)", "print(P1)"] {
        assert!(matches!(
            evaluate_summary(&fields(), expr, ""),
            Err(FormulaError::UnknownFunction(_))
        ));
    }
    // The allowed elementary functions all work
    for expr in ["abs(P1)", "sqrt(Von)", "min(P1, P3)", "max(P1, 2)", "exp(P3)", "ln(Von)"] {
        assert!(evaluate_summary(&fields(), expr, "").is_ok(), "{expr}");
    }
}

/// Empty input is an explicit error, not an arithmetic fault
#[test]
fn test_empty_field_set() {
    assert!(matches!(
        evaluate_summary(&FieldSet::new(), "1", ""),
        Err(FormulaError::EmptyInput)
    ));
}

/// A syntactically broken formula reports a syntax error
#[test]
fn test_syntax_errors() {
    for expr in ["", "1 +", "(P1", "2 3", "min(P1,)"] {
        assert!(
            matches!(
                evaluate_summary(&fields(), expr, ""),
                Err(FormulaError::Syntax(_))
            ),
            "{expr:?}"
        );
    }
}
