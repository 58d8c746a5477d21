//! Field expression Abstract Syntax Tree types
//!
//! The AST is deliberately closed: numeric literals, field references, the
//! arithmetic operators and allow-listed function calls are the only
//! representable constructs. Expressions come from interactive users, so
//! nothing here can name state outside the supplied field set.

/// Field expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum FieldExpr {
    /// Numeric literal (broadcast across all nodes)
    Number(f64),
    /// Reference to a named per-node field
    FieldRef(String),
    /// Binary operation, applied element-wise
    BinaryOp {
        op: BinaryOperator,
        left: Box<FieldExpr>,
        right: Box<FieldExpr>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<FieldExpr>,
    },
    /// Allow-listed function call
    Function { name: String, args: Vec<FieldExpr> },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}
