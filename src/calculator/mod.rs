//! Calculator module for evaluating arithmetic expressions.
//!
//! This module provides functionality to:
//! - Tokenize and evaluate infix expressions with `+ - * / ^`, parentheses,
//!   and `sin`, `cos`, `sqrt`
//! - Render results for display
//! - Pre-check typed text before it enters an input buffer

mod detection;
mod error;
mod evaluation;
mod format;
mod token;

pub use detection::looks_like_expression;
pub use error::EvalError;
pub use evaluation::evaluate;
pub use format::{CalcResult, DisplayConfig, NumberStyle, calculate, format_value};
pub use token::{Function, Operator, Spanned, Token, Tokens, tokenize};
