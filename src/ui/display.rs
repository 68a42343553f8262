//! The calculator display: a text buffer in front of the engine.

use super::keypad::Key;
use crate::calculator::{CalculatorBrain, format_clipboard, format_display};
use crate::config::DisplayConfig;
use crate::error::{CalcError, Result};

/// Display text plus the engine it feeds.
///
/// Digits accumulate in the text buffer while the user is typing. The first
/// operator press after typing hands the parsed buffer to the engine as its
/// operand; every operator press then writes the engine's result back.
#[derive(Debug)]
pub struct Display {
    text: String,
    typing: bool,
    brain: CalculatorBrain,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            typing: false,
            brain: CalculatorBrain::new(),
        }
    }

    /// The raw display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The engine's current result.
    pub fn result(&self) -> f64 {
        self.brain.result()
    }

    /// Parse the display text as a number.
    pub fn value(&self) -> Result<f64> {
        self.text
            .parse()
            .map_err(|_| CalcError::InvalidDisplay(self.text.clone()))
    }

    fn set_value(&mut self, value: f64) {
        self.text = value.to_string();
    }

    pub fn press(&mut self, key: &Key) -> Result<()> {
        match key {
            Key::Digit(digit) => {
                self.touch_digit(*digit);
                Ok(())
            }
            Key::Operation(symbol) => self.perform_operation(symbol),
        }
    }

    /// Append a digit or decimal point to the number being typed.
    ///
    /// A second decimal point in the same number is dropped, and a number
    /// started with `.` reads `0.`.
    pub fn touch_digit(&mut self, digit: char) {
        if self.typing {
            if digit != '.' || !self.text.contains('.') {
                self.text.push(digit);
            }
        } else if digit == '.' {
            self.text = "0.".to_string();
        } else {
            self.text = digit.to_string();
        }
        self.typing = true;
    }

    /// Send the typed number (if any) and `symbol` to the engine, then show
    /// the result.
    pub fn perform_operation(&mut self, symbol: &str) -> Result<()> {
        if self.typing {
            let operand = self.value()?;
            self.brain.set_operand(operand);
            self.typing = false;
        }

        self.brain.perform_operation(symbol);
        self.set_value(self.brain.result());
        Ok(())
    }

    /// What the user sees.
    ///
    /// While typing this is the buffer verbatim. Otherwise it is the
    /// formatted result, prefixed with `= ` unless an operator is still
    /// waiting for its right operand.
    pub fn render(&self, config: &DisplayConfig) -> String {
        if self.typing {
            return self.text.clone();
        }

        let formatted = format_display(self.brain.result(), config);
        if self.brain.has_pending() {
            formatted
        } else {
            format!("= {}", formatted)
        }
    }

    /// The shown number in a form suitable for pasting elsewhere.
    pub fn clipboard_text(&self, config: &DisplayConfig) -> String {
        if self.typing {
            self.text.clone()
        } else {
            format_clipboard(self.brain.result(), config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(display: &mut Display, digits: &str) {
        for digit in digits.chars() {
            display.touch_digit(digit);
        }
    }

    #[test]
    fn test_initial_state() {
        let display = Display::new();
        assert_eq!(display.text(), "0");
        assert!(!display.is_typing());
        assert_eq!(display.value().unwrap(), 0.0);
    }

    #[test]
    fn test_typing_replaces_then_appends() {
        let mut display = Display::new();
        type_digits(&mut display, "42");
        assert_eq!(display.text(), "42");
        assert!(display.is_typing());
    }

    #[test]
    fn test_single_decimal_point() {
        let mut display = Display::new();
        type_digits(&mut display, "1.2.3");
        assert_eq!(display.text(), "1.23");
        type_digits(&mut display, ".");
        assert_eq!(display.text(), "1.23");
    }

    #[test]
    fn test_leading_decimal_point() {
        let mut display = Display::new();
        type_digits(&mut display, ".5");
        assert_eq!(display.text(), "0.5");
        assert_eq!(display.value().unwrap(), 0.5);
    }

    #[test]
    fn test_operation_writes_result_back() {
        let mut display = Display::new();
        type_digits(&mut display, "3");
        display.perform_operation("+").unwrap();
        assert!(!display.is_typing());
        assert_eq!(display.text(), "3");

        type_digits(&mut display, "4");
        assert_eq!(display.text(), "4");
        display.perform_operation("=").unwrap();
        assert_eq!(display.text(), "7");
        assert_eq!(display.result(), 7.0);
    }

    #[test]
    fn test_operator_without_typing_reuses_accumulator() {
        let mut display = Display::new();
        type_digits(&mut display, "5");
        display.perform_operation("+").unwrap();
        display.perform_operation("=").unwrap();
        assert_eq!(display.result(), 10.0);
    }

    #[test]
    fn test_typing_after_result_starts_fresh_number() {
        let mut display = Display::new();
        type_digits(&mut display, "9");
        display.perform_operation("√").unwrap();
        assert_eq!(display.text(), "3");
        type_digits(&mut display, "1");
        assert_eq!(display.text(), "1");
    }

    #[test]
    fn test_nan_is_shown_not_parsed() {
        let mut display = Display::new();
        type_digits(&mut display, "0");
        display.perform_operation("-").unwrap();
        type_digits(&mut display, "1");
        display.perform_operation("=").unwrap();
        display.perform_operation("√").unwrap();
        assert!(display.result().is_nan());
        assert_eq!(display.render(&DisplayConfig::default()), "= Not a Number");

        type_digits(&mut display, "2");
        display.perform_operation("=").unwrap();
        assert_eq!(display.result(), 2.0);
    }

    #[test]
    fn test_render() {
        let config = DisplayConfig::default();
        let mut display = Display::new();
        assert_eq!(display.render(&config), "= 0");

        type_digits(&mut display, "1234.50");
        assert_eq!(display.render(&config), "1234.50");

        display.perform_operation("x").unwrap();
        assert_eq!(display.render(&config), "1,234.5");

        type_digits(&mut display, "2");
        display.perform_operation("=").unwrap();
        assert_eq!(display.render(&config), "= 2,469");
        assert_eq!(display.clipboard_text(&config), "2469");
    }

    #[test]
    fn test_clipboard_text_while_typing() {
        let mut display = Display::new();
        type_digits(&mut display, "0.");
        assert_eq!(display.clipboard_text(&DisplayConfig::default()), "0.");
    }

    #[test]
    fn test_press_dispatches_keys() {
        let mut display = Display::new();
        for key in [
            Key::Digit('2'),
            Key::Operation("x".to_string()),
            Key::Digit('3'),
            Key::Operation("+".to_string()),
            Key::Digit('4'),
            Key::Operation("=".to_string()),
        ] {
            display.press(&key).unwrap();
        }
        assert_eq!(display.result(), 10.0);
    }
}
