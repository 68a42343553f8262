//! Splits a line of text into key presses.
//!
//! A line like `12.5 x 3 =` or `12.5x3=` becomes the same presses a user
//! would make on the button pad: one press per digit or decimal point, one
//! press per operator symbol.

use crate::calculator::symbols;
use crate::config::KeypadConfig;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use tracing::trace;

/// Spellings that are easier to type than the button symbols.
const DEFAULT_ALIASES: &[(&str, &str)] = &[("*", "x"), ("/", "÷"), ("sqrt", "√"), ("pi", "π")];

lazy_static! {
    /// Matches one token: a run of digits and dots, a run of letters
    /// (named symbols like `cos`), or any other single character.
    static ref TOKEN: Regex = Regex::new(r"[0-9.]+|[A-Za-z]+|\S").unwrap();
}

/// A single button press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// An operation symbol, passed to the engine as-is.
    Operation(String),
}

#[derive(Debug)]
pub struct Keypad {
    aliases: HashMap<String, String>,
    /// Letter-only symbols and aliases, longest first.
    words: Vec<String>,
}

impl Keypad {
    pub fn new(config: &KeypadConfig) -> Self {
        let mut aliases: HashMap<String, String> = DEFAULT_ALIASES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        aliases.extend(config.aliases.clone());

        let mut words: Vec<String> = symbols()
            .into_iter()
            .map(str::to_string)
            .chain(aliases.keys().cloned())
            .filter(|word| is_word(word))
            .collect();
        words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();

        Self { aliases, words }
    }

    /// Translate a line of input into key presses.
    pub fn keys(&self, input: &str) -> Vec<Key> {
        let mut keys = Vec::new();
        for token in TOKEN.find_iter(input).map(|m| m.as_str()) {
            if is_number(token) {
                keys.extend(token.chars().map(Key::Digit));
                continue;
            }

            if is_word(token)
                && let Some(parts) = self.split_word(token)
            {
                keys.extend(parts.into_iter().map(|part| Key::Operation(self.resolve(part))));
                continue;
            }
            keys.push(Key::Operation(self.resolve(token)));
        }
        keys
    }

    /// Split a run of letters like `xpi` into known names by longest match.
    /// Returns `None` if some part of the run matches no name.
    fn split_word<'a>(&self, mut word: &'a str) -> Option<Vec<&'a str>> {
        let mut parts = Vec::new();
        while !word.is_empty() {
            let name = self.words.iter().find(|name| word.starts_with(name.as_str()))?;
            let (part, rest) = word.split_at(name.len());
            parts.push(part);
            word = rest;
        }
        Some(parts)
    }

    fn resolve(&self, token: &str) -> String {
        match self.aliases.get(token) {
            Some(symbol) => {
                trace!(token, symbol = symbol.as_str(), "resolved alias");
                symbol.clone()
            }
            None => token.to_string(),
        }
    }

    /// All aliases as `(input, symbol)` pairs, sorted by input.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut aliases: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        aliases.sort_unstable();
        aliases
    }
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad() -> Keypad {
        Keypad::new(&KeypadConfig::default())
    }

    fn op(symbol: &str) -> Key {
        Key::Operation(symbol.to_string())
    }

    #[test]
    fn test_digits_are_split() {
        assert_eq!(
            keypad().keys("12.5"),
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Digit('.'),
                Key::Digit('5')
            ]
        );
    }

    #[test]
    fn test_spacing_is_optional() {
        let spaced = keypad().keys("3 + 4 =");
        let packed = keypad().keys("3+4=");
        assert_eq!(spaced, packed);
        assert_eq!(spaced, vec![Key::Digit('3'), op("+"), Key::Digit('4'), op("=")]);
    }

    #[test]
    fn test_named_and_unicode_symbols() {
        assert_eq!(keypad().keys("cos"), vec![op("cos")]);
        assert_eq!(keypad().keys("2cos"), vec![Key::Digit('2'), op("cos")]);
        assert_eq!(keypad().keys("9√"), vec![Key::Digit('9'), op("√")]);
        assert_eq!(keypad().keys("π ÷ e"), vec![op("π"), op("÷"), op("e")]);
        assert_eq!(keypad().keys("C"), vec![op("C")]);
    }

    #[test]
    fn test_default_aliases() {
        assert_eq!(
            keypad().keys("2*3/pi sqrt"),
            vec![
                Key::Digit('2'),
                op("x"),
                Key::Digit('3'),
                op("÷"),
                op("π"),
                op("√")
            ]
        );
    }

    #[test]
    fn test_configured_aliases_override_defaults() {
        let mut config = KeypadConfig::default();
        config.aliases.insert("*".to_string(), "+".to_string());
        config.aliases.insert("clear".to_string(), "C".to_string());
        let keypad = Keypad::new(&config);
        assert_eq!(keypad.keys("* clear"), vec![op("+"), op("C")]);
    }

    #[test]
    fn test_packed_named_symbols_are_split() {
        assert_eq!(keypad().keys("2xpi="), keypad().keys("2 x pi ="));
        assert_eq!(
            keypad().keys("3xe="),
            vec![Key::Digit('3'), op("x"), op("e"), op("=")]
        );
        assert_eq!(keypad().keys("pisqrtcos"), vec![op("π"), op("√"), op("cos")]);
        assert_eq!(keypad().keys("Ce"), vec![op("C"), op("e")]);
    }

    #[test]
    fn test_configured_aliases_take_part_in_splitting() {
        let mut config = KeypadConfig::default();
        config.aliases.insert("times".to_string(), "x".to_string());
        let keypad = Keypad::new(&config);
        assert_eq!(keypad.keys("2timese"), vec![Key::Digit('2'), op("x"), op("e")]);
    }

    #[test]
    fn test_unsplittable_words_pass_through() {
        assert_eq!(keypad().keys("xyz"), vec![op("xyz")]);
        assert_eq!(keypad().keys("cosy"), vec![op("cosy")]);
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        assert_eq!(keypad().keys("? foo"), vec![op("?"), op("foo")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(keypad().keys("").is_empty());
        assert!(keypad().keys("   ").is_empty());
    }

    #[test]
    fn test_aliases_sorted() {
        assert_eq!(
            keypad().aliases(),
            vec![("*", "x"), ("/", "÷"), ("pi", "π"), ("sqrt", "√")]
        );
    }
}
