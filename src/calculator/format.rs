//! Turning evaluation outcomes into display text.

use super::error::EvalError;
use super::evaluation::evaluate;
use serde::{Deserialize, Serialize};

/// How numeric results are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    /// Shortest round-trip form, integral values keep `.0` (`4.0`, `0.5`).
    /// Very large or very small magnitudes switch to exponent form (`1e16`, `1e-7`).
    #[default]
    Plain,
    /// Thousand separators, at most ten decimals (`1,000,000`).
    Grouped,
}

/// Display settings used when rendering a [`CalcResult`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub number_style: NumberStyle,
    /// Text shown in place of a result when evaluation fails.
    pub error_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            number_style: NumberStyle::Plain,
            error_text: "Error".to_string(),
        }
    }
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug)]
pub enum CalcResult {
    /// Evaluation produced a number (possibly infinite or NaN).
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display.
        display_result: String,
    },
    /// Evaluation failed.
    Error {
        /// The original expression.
        expression: String,
        /// What went wrong.
        error: EvalError,
        /// Error text to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error text).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// The underlying error, for callers that want more than the error text.
    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }
}

/// Evaluate `input` and render the outcome for display.
pub fn calculate(input: &str, config: &DisplayConfig) -> CalcResult {
    let expression = input.trim().to_string();

    match evaluate(&expression) {
        Ok(value) => CalcResult::Success {
            display_result: format_value(value, config.number_style),
            expression,
            value,
        },
        Err(error) => CalcResult::Error {
            expression,
            error,
            message: config.error_text.clone(),
        },
    }
}

/// Format a number in the given style.
pub fn format_value(value: f64, style: NumberStyle) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    match style {
        NumberStyle::Plain => format!("{value:?}"),
        NumberStyle::Grouped => format_grouped(value),
    }
}

fn format_grouped(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format_with_separators(value as i64);
    }

    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // Split off the sign so "-0.5" keeps it even though the integer part is zero
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, dec_part) = digits.split_at(digits.find('.').unwrap_or(digits.len()));

    format!("{}{}{}", sign, group_digits(int_part), dec_part)
}

/// Format an integer with thousand separators.
fn format_with_separators(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    if value < 0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}

fn group_digits(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> DisplayConfig {
        DisplayConfig {
            number_style: NumberStyle::Grouped,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_plain_display() {
        let result = calculate("2 + 2", &DisplayConfig::default());
        assert!(result.is_success());
        assert_eq!(result.display(), "4.0");
        assert_eq!(result.expression(), "2 + 2");

        assert_eq!(calculate("1/4", &DisplayConfig::default()).display(), "0.25");
    }

    #[test]
    fn test_thousand_separators() {
        let result = calculate("1000 * 1000", &grouped());
        assert_eq!(result.display(), "1,000,000");

        let result = calculate("0 - 1234567", &grouped());
        assert_eq!(result.display(), "-1,234,567");
    }

    #[test]
    fn test_grouped_decimals() {
        let result = calculate("1 / 3", &grouped());
        assert_eq!(result.display(), "0.3333333333");

        let result = calculate("0 - 2500.5", &grouped());
        assert_eq!(result.display(), "-2,500.5");

        let result = calculate("0 - 0.5", &grouped());
        assert_eq!(result.display(), "-0.5");
    }

    #[test]
    fn test_plain_exponent_form() {
        assert_eq!(format_value(1e16, NumberStyle::Plain), "1e16");
        assert_eq!(format_value(1e-7, NumberStyle::Plain), "1e-7");
        assert_eq!(format_value(123456.0, NumberStyle::Plain), "123456.0");
    }

    #[test]
    fn test_non_finite_values_are_results() {
        let result = calculate("1 / 0", &DisplayConfig::default());
        assert!(result.is_success());
        assert_eq!(result.display(), "Infinity");

        assert_eq!(calculate("0-1/0", &grouped()).display(), "-Infinity");
        assert_eq!(calculate("sqrt(0-1)", &DisplayConfig::default()).display(), "NaN");
    }

    #[test]
    fn test_error_text() {
        let result = calculate("3+", &DisplayConfig::default());
        assert!(!result.is_success());
        assert_eq!(result.display(), "Error");
        assert_eq!(
            result.error(),
            Some(&EvalError::StackUnderflow { symbol: "+" })
        );

        let config = DisplayConfig {
            error_text: "Syntax?".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(calculate("3&2", &config).display(), "Syntax?");
    }
}
