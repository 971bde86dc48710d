//! # sheetcalc-formula
//!
//! Formula evaluator for sheetcalc.
//!
//! This crate provides:
//! - Formula evaluation (raw cell text + snapshot → display text)
//! - Built-in functions: SUM, AVERAGE/AVG, COUNT, MIN, MAX, PRODUCT, ROUND,
//!   IF, VLOOKUP, ABS, SQRT, POWER, MOD, CEILING, FLOOR
//! - A recursive descent parser for arithmetic expressions
//! - Number formatting for display
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::Snapshot;
//! use sheetcalc_formula::evaluate;
//!
//! let cells: Snapshot = [("A1", "10"), ("A2", "5")].into_iter().collect();
//! assert_eq!(evaluate("=IF(A1>A2,\"X\",\"Y\")", &cells), "X");
//! assert_eq!(evaluate("=VLOOKUP(\"Kiwi\",A1:B2,2)", &cells), "#N/A");
//! ```

pub mod arithmetic;
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod functions;
pub mod range;

pub use ast::{ArithExpr, BinaryOperator, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    evaluate, evaluate_formula, Evaluation, ERROR_SENTINEL, NOT_AVAILABLE_SENTINEL,
};
pub use format::format_number;
