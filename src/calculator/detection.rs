//! Cheap pre-check for text typed into the calculator.
//!
//! Decides whether free text could be part of an expression before it is
//! accepted into the input buffer. This does not validate syntax; the
//! evaluator does that on `=`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits, the decimal point, operators, parentheses, spaces, and the
    /// lowercase letters function names are made of.
    static ref EXPRESSION_CHARS: Regex = Regex::new(r"^[0-9. +\-*/^()a-z]+$").unwrap();
}

/// Check if `text` only uses characters the evaluator understands.
///
/// Blank text is rejected.
pub fn looks_like_expression(text: &str) -> bool {
    !text.trim().is_empty() && EXPRESSION_CHARS.is_match(text)
}
