//! Core calculator engine: errors, operations, parsing, evaluation, history.

pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

/// Formats a number for display (removes trailing zeros)
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.10}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
