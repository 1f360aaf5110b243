//! Errors produced while tokenizing or evaluating an expression.

use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Arithmetic anomalies (division by zero, square root of a negative number)
/// are not errors; they come back as IEEE-754 infinities or NaN.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A run of input is not a number, function, operator or parenthesis.
    #[error("unrecognized token `{token}` at offset {offset}")]
    Lex { token: String, offset: usize },

    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// An operator or function ran out of operands.
    #[error("not enough operands for `{symbol}`")]
    StackUnderflow { symbol: &'static str },

    /// Evaluation finished with anything but exactly one value.
    #[error("expected a single result, found {remaining} values")]
    MalformedResult { remaining: usize },
}
