//! Human-readable rendering of calculator results.

use crate::config::DisplayConfig;

/// Format a result for display, grouping thousands if configured.
pub fn format_display(value: f64, config: &DisplayConfig) -> String {
    format_value(value, config.precision, config.group_thousands)
}

/// Format a result for the clipboard (raw number, no separators).
pub fn format_clipboard(value: f64, config: &DisplayConfig) -> String {
    format_value(value, config.precision, false)
}

fn format_value(value: f64, precision: usize, group: bool) -> String {
    if value.is_nan() {
        return "Not a Number".to_string();
    }
    if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return msg.to_string();
    }

    let raw = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.*}", precision, value);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    };

    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.as_str()),
    };

    // Rounding can leave "-0".
    let negative = negative && unsigned.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let int_part = if group {
        group_digits(int_part)
    } else {
        int_part.to_string()
    };

    format!("{}{}{}", if negative { "-" } else { "" }, int_part, dec_part)
}

/// Insert a `,` every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
