//! Calculator buttons.

use crate::calculator::{Function, Operator};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Button labels in grid order, six rows of four.
pub const LAYOUT: [[&str; 4]; 6] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["(", ")", "C", "DEL"],
    ["sin", "cos", "sqrt", "^"],
];

/// A single button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Function(Function),
    /// `=`: evaluate the input buffer.
    Equals,
    /// `C`: clear input and display.
    Clear,
    /// `DEL`: remove the last input character.
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown key `{0}`")]
pub struct UnknownKey(pub String);

impl Key {
    /// Text this key appends to the input buffer, if it appends anything.
    pub fn input_text(self) -> Option<String> {
        match self {
            Self::Digit(d) => Some(d.to_string()),
            Self::Point => Some(".".to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            Self::OpenParen => Some("(".to_string()),
            Self::CloseParen => Some(")".to_string()),
            // Function buttons open their argument group right away
            Self::Function(f) => Some(format!("{}(", f.name())),
            Self::Equals | Self::Clear | Self::Delete => None,
        }
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::Point,
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            "=" => Self::Equals,
            "C" => Self::Clear,
            "DEL" => Self::Delete,
            _ => {
                if let [c @ b'0'..=b'9'] = label.as_bytes() {
                    Self::Digit(c - b'0')
                } else if let Some(f) = Function::from_name(label) {
                    Self::Function(f)
                } else {
                    let mut chars = label.chars();
                    match (chars.next().and_then(Operator::from_symbol), chars.next()) {
                        (Some(op), None) => Self::Operator(op),
                        _ => return Err(UnknownKey(label.to_string())),
                    }
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Point => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
            Self::Function(func) => f.write_str(func.name()),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Delete => f.write_str("DEL"),
        }
    }
}
