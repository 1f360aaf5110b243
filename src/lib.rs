//! A small scientific calculator.
//!
//! [`calculator::evaluate`] turns an infix expression such as `sqrt(9)+2^3`
//! into a number. [`keypad::Keypad`] models the button grid in front of it:
//! it builds the expression one key at a time and renders the outcome.

pub mod calculator;
pub mod config;
pub mod keypad;

pub use calculator::{CalcResult, EvalError, evaluate};
pub use config::Config;
pub use keypad::{Key, Keypad};
