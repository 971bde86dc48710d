//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while evaluating a formula
///
/// These never reach the display layer directly: the evaluator reports them
/// as the `#ERROR` sentinel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Arithmetic expression parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Division by zero in an arithmetic expression
    #[error("Division by zero")]
    DivisionByZero,

    /// Invalid argument
    #[error("Invalid argument to {function}: {message}")]
    Argument {
        function: &'static str,
        message: String,
    },
}

impl FormulaError {
    /// Create an argument error for a function
    pub fn argument<S: Into<String>>(function: &'static str, message: S) -> Self {
        FormulaError::Argument {
            function,
            message: message.into(),
        }
    }
}
