//! Failure kinds surfaced to clients.

use thiserror::Error;

/// Errors produced while handling a calculation request.
///
/// The `Display` text is the exact message placed in the `error` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// `num1` or `num2` is missing or not a number.
    #[error("Invalid input values.")]
    InvalidInput,

    /// The operation name is not in the table (or not in the route's group).
    #[error("Invalid operation")]
    InvalidOperation,

    /// The denominator `num2` is zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// A POST body was sent without `application/json`.
    #[error("Invalid content type")]
    InvalidContentType,
}

impl CalcError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::InvalidInput => "invalid_input",
            CalcError::InvalidOperation => "invalid_operation",
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::InvalidContentType => "invalid_content_type",
        }
    }
}
