//! Formula evaluator
//!
//! Turns the raw text of a cell plus a snapshot of every other cell's
//! display value into the text the cell should display.
//!
//! Evaluation runs in stages, and the first stage that recognizes the
//! formula answers it:
//!
//! 1. Text that does not start with `=` is a literal and shown as is.
//! 2. A call to a built-in function (`SUM(...)`, `IF(...)`, ...).
//! 3. Pure arithmetic over numbers (`5+3*2`).
//! 4. A single cell reference (`A1`).
//!
//! Anything else is shown unchanged. Failures show as `#ERROR`, and a
//! VLOOKUP without a match shows as `#N/A`.

use crate::arithmetic::evaluate_arithmetic;
use crate::error::FormulaError;
use crate::format::format_number;
use crate::functions::{is_cell_reference, FunctionOutcome, FunctionRegistry};
use lazy_regex::regex_is_match;
use sheetcalc_core::Snapshot;
use std::sync::OnceLock;

/// Display value of a formula that failed to evaluate
pub const ERROR_SENTINEL: &str = "#ERROR";

/// Display value of a lookup that found nothing
pub const NOT_AVAILABLE_SENTINEL: &str = "#N/A";

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

fn get_function_registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// How a formula was evaluated
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Input without a leading `=`, shown unchanged
    Literal(String),
    /// A computed display value
    Value(String),
    /// A lookup found no match
    NotAvailable,
    /// Starts with `=` but matched nothing the evaluator understands;
    /// carries the original text
    Unrecognized(String),
    /// Evaluation failed
    Error(FormulaError),
}

impl Evaluation {
    /// The text a cell shows for this outcome
    pub fn into_display(self) -> String {
        match self {
            Evaluation::Literal(text)
            | Evaluation::Value(text)
            | Evaluation::Unrecognized(text) => text,
            Evaluation::NotAvailable => NOT_AVAILABLE_SENTINEL.to_string(),
            Evaluation::Error(_) => ERROR_SENTINEL.to_string(),
        }
    }

    /// Whether evaluation failed
    pub fn is_error(&self) -> bool {
        matches!(self, Evaluation::Error(_))
    }
}

/// Evaluate a formula and return its display value
///
/// Never fails: errors are reported as [`ERROR_SENTINEL`].
///
/// # Example
/// ```rust
/// use sheetcalc_core::Snapshot;
/// use sheetcalc_formula::evaluate;
///
/// let cells: Snapshot = [("A1", "1"), ("A2", "2"), ("A3", "3")].into_iter().collect();
/// assert_eq!(evaluate("=SUM(A1:A3)", &cells), "6");
/// assert_eq!(evaluate("=5+3*2", &cells), "11");
/// assert_eq!(evaluate("hello", &cells), "hello");
/// ```
pub fn evaluate(formula: &str, snapshot: &Snapshot) -> String {
    evaluate_formula(formula, snapshot).into_display()
}

/// Evaluate a formula, keeping track of how the display value came about
pub fn evaluate_formula(formula: &str, snapshot: &Snapshot) -> Evaluation {
    let Some(content) = formula.strip_prefix('=') else {
        return Evaluation::Literal(formula.to_string());
    };
    let content = content.to_uppercase();

    match evaluate_content(&content, snapshot) {
        Ok(Some(evaluation)) => evaluation,
        Ok(None) => Evaluation::Unrecognized(formula.to_string()),
        Err(e) => {
            log::debug!("{:?} failed to evaluate: {}", formula, e);
            Evaluation::Error(e)
        }
    }
}

/// Evaluate uppercased formula content; `None` when nothing recognizes it
fn evaluate_content(content: &str, snapshot: &Snapshot) -> Result<Option<Evaluation>, FormulaError> {
    // Function call
    match get_function_registry().call(content, snapshot)? {
        FunctionOutcome::Value(value) => return Ok(Some(Evaluation::Value(value))),
        FunctionOutcome::NotAvailable => return Ok(Some(Evaluation::NotAvailable)),
        FunctionOutcome::Declined => log::trace!("no function answered {:?}", content),
    }

    // Arithmetic
    if regex_is_match!(r"^[0-9\s+\-*/().]+$", content) {
        let result = evaluate_arithmetic(content)?;
        return Ok(Some(Evaluation::Value(format_number(result))));
    }

    // Cell reference
    if is_cell_reference(content) {
        let value = snapshot.get(content).unwrap_or_default();
        return Ok(Some(Evaluation::Value(value.to_string())));
    }

    Ok(None)
}
