//! Headless calculator keypad.
//!
//! Collects button presses into an input buffer and hands the finished
//! expression to the evaluator on `=`. The display always shows either the
//! current input or the rendered outcome of the last evaluation.

mod key;

pub use key::{Key, LAYOUT, UnknownKey};

use crate::calculator::{CalcResult, DisplayConfig, calculate, looks_like_expression};
use crate::config::Config;
use tracing::{debug, warn};

/// Input buffer plus display text.
#[derive(Clone, Debug)]
pub struct Keypad {
    input: String,
    display: String,
    last_result: Option<CalcResult>,
    display_config: DisplayConfig,
    max_input_len: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Keypad {
    pub fn new(config: &Config) -> Self {
        Self {
            input: String::new(),
            display: String::new(),
            last_result: None,
            display_config: config.display.clone(),
            max_input_len: config.input.max_length,
        }
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Outcome of the most recent `=`, if any.
    pub fn last_result(&self) -> Option<&CalcResult> {
        self.last_result.as_ref()
    }

    /// Press a key and return the resulting display text.
    pub fn press(&mut self, key: Key) -> &str {
        debug!(%key, "key pressed");

        match key {
            Key::Equals => {
                let result = calculate(&self.input, &self.display_config);
                // The buffer is dropped whether or not evaluation succeeded
                self.input.clear();
                self.display = result.display().to_string();
                self.last_result = Some(result);
                return &self.display;
            }
            Key::Clear => self.input.clear(),
            Key::Delete => {
                self.input.pop();
            }
            _ => {
                if let Some(text) = key.input_text() {
                    self.append(&text);
                }
            }
        }

        self.display.clone_from(&self.input);
        &self.display
    }

    /// Append free text to the input buffer.
    ///
    /// Returns `false` (leaving the buffer untouched) when the text contains
    /// characters no expression can use, or would overflow the buffer.
    pub fn type_text(&mut self, text: &str) -> bool {
        if !looks_like_expression(text) {
            warn!(text, "ignoring text that is not part of an expression");
            return false;
        }

        let appended = self.append(text);
        self.display.clone_from(&self.input);
        appended
    }

    /// Handle one line of typed input and return the display text.
    ///
    /// A line is either a single key label (`C`, `DEL`, `=`, `sin`, ...) or
    /// expression text to append; text ending in `=` is evaluated right away.
    /// Text that cannot be appended is not evaluated.
    pub fn enter_line(&mut self, line: &str) -> &str {
        let line = line.trim();
        if line.is_empty() {
            return &self.display;
        }

        if let Ok(key) = line.parse::<Key>() {
            return self.press(key);
        }

        match line.strip_suffix('=') {
            Some(text) if text.trim().is_empty() || self.type_text(text) => {
                self.press(Key::Equals)
            }
            Some(_) => &self.display,
            None => {
                self.type_text(line);
                &self.display
            }
        }
    }

    fn append(&mut self, text: &str) -> bool {
        if self.input.len() + text.len() > self.max_input_len {
            warn!(
                max = self.max_input_len,
                "input buffer full, ignoring `{}`", text
            );
            return false;
        }
        self.input.push_str(text);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{EvalError, NumberStyle};

    fn press_all(keypad: &mut Keypad, labels: &[&str]) -> String {
        for label in labels {
            keypad.press(label.parse().unwrap());
        }
        keypad.display().to_string()
    }

    #[test]
    fn test_display_mirrors_input() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["1", "2", "+", "3"]), "12+3");
        assert_eq!(keypad.input(), "12+3");
    }

    #[test]
    fn test_equals_shows_result_and_clears_input() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["3", "+", "4", "*", "2", "="]), "11.0");
        assert_eq!(keypad.input(), "");
        assert!(keypad.last_result().unwrap().is_success());

        // Next key starts a fresh expression
        assert_eq!(press_all(&mut keypad, &["5"]), "5");
    }

    #[test]
    fn test_function_keys_open_a_group() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["sqrt", "9"]), "sqrt(9");
        assert_eq!(press_all(&mut keypad, &[")", "+", "1", "="]), "4.0");
    }

    #[test]
    fn test_error_shows_error_text_and_clears_input() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["3", "+", "="]), "Error");
        assert_eq!(keypad.input(), "");
        assert_eq!(
            keypad.last_result().unwrap().error(),
            Some(&EvalError::StackUnderflow { symbol: "+" })
        );
    }

    #[test]
    fn test_clear_and_delete() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["1", "2", "DEL"]), "1");
        assert_eq!(press_all(&mut keypad, &["C"]), "");
        assert_eq!(press_all(&mut keypad, &["DEL", "DEL"]), "");
    }

    #[test]
    fn test_delete_after_result_clears_display() {
        let mut keypad = Keypad::default();
        press_all(&mut keypad, &["2", "^", "3", "="]);
        assert_eq!(keypad.display(), "8.0");
        assert_eq!(press_all(&mut keypad, &["DEL"]), "");
    }

    #[test]
    fn test_empty_equals_is_an_error() {
        let mut keypad = Keypad::default();
        assert_eq!(press_all(&mut keypad, &["="]), "Error");
    }

    #[test]
    fn test_type_text() {
        let mut keypad = Keypad::default();
        assert!(keypad.type_text("sqrt(16)*2"));
        assert!(!keypad.type_text("+ x%"));
        assert_eq!(keypad.display(), "sqrt(16)*2");
        assert_eq!(press_all(&mut keypad, &["+", "1", "="]), "9.0");
    }

    #[test]
    fn test_enter_line() {
        let mut keypad = Keypad::default();

        assert_eq!(keypad.enter_line("sqrt"), "sqrt(");
        assert_eq!(keypad.enter_line("9)+1"), "sqrt(9)+1");
        assert_eq!(keypad.enter_line(" = "), "4.0");
        assert_eq!(keypad.input(), "");

        assert_eq!(keypad.enter_line("2^3^2="), "64.0");
        assert_eq!(keypad.enter_line(""), "64.0");

        assert_eq!(keypad.enter_line("12"), "12");
        assert_eq!(keypad.enter_line("DEL"), "1");
        assert_eq!(keypad.enter_line("+3 ="), "4.0");
    }

    #[test]
    fn test_enter_line_rejects_foreign_text() {
        let mut keypad = Keypad::default();
        assert_eq!(keypad.enter_line("1+"), "1+");
        // Not appended and not evaluated
        assert_eq!(keypad.enter_line("x%2="), "1+");
        assert_eq!(keypad.input(), "1+");
        assert!(keypad.last_result().is_none());

        assert_eq!(keypad.enter_line("="), "Error");
    }

    #[test]
    fn test_input_limit() {
        let mut config = Config::default();
        config.input.max_length = 5;
        let mut keypad = Keypad::new(&config);

        assert!(keypad.type_text("1+2"));
        assert_eq!(press_all(&mut keypad, &["sqrt"]), "1+2");
        assert_eq!(press_all(&mut keypad, &["*", "3", "4"]), "1+2*3");
        assert_eq!(press_all(&mut keypad, &["="]), "7.0");
    }

    #[test]
    fn test_display_config_is_used() {
        let mut config = Config::default();
        config.display.number_style = NumberStyle::Grouped;
        config.display.error_text = "E".to_string();
        let mut keypad = Keypad::new(&config);

        assert!(keypad.type_text("1000*1000"));
        assert_eq!(press_all(&mut keypad, &["="]), "1,000,000");
        assert_eq!(press_all(&mut keypad, &[")", "="]), "E");
    }
}
