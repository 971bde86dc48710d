//! Arithmetic expression syntax tree

/// Arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum ArithExpr {
    /// Numeric literal
    Number(f64),
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<ArithExpr>,
    },
    /// Left-associative run of operators sharing one precedence level,
    /// `first op rest[0].1 op rest[1].1 ...`
    Chain {
        first: Box<ArithExpr>,
        rest: Vec<(BinaryOperator, ArithExpr)>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Negate,
}
