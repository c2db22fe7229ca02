//! Text-to-number rules for the measurement, amount and quantity fields.
//!
//! Functions returning `Option` reject a keystroke with `None`: the field
//! keeps its previous value. Empty input always means zero.

use crate::config::GROUP_SEPARATOR;
use crate::generator::{group_thousands, round_half_away};

/// Parse a measurement or percentage field (`1.5`, `.5`, `2.`).
///
/// Only digits and a single `.` are accepted.
pub fn parse_decimal_input(text: &str) -> Option<f64> {
    let mut seen_dot = false;
    for ch in text.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }

    if text.is_empty() || text == "." {
        return Some(0.0);
    }
    text.parse::<f64>().ok()
}

/// Round a measurement once editing is finished.
pub fn finalize_decimal_input(value: f64, max_decimals: usize) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    round_half_away(value, max_decimals)
}

/// Parse an amount field with id-ID grouping (`1.250.000`).
pub fn parse_currency_input(text: &str) -> Option<f64> {
    let raw: String = text.chars().filter(|&c| c != GROUP_SEPARATOR).collect();
    if raw.is_empty() {
        return Some(0.0);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Render an amount for editing: empty for zero, grouped digits otherwise.
pub fn format_currency_input(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return String::new();
    }
    group_thousands(&format!("{:.0}", value.abs().round()))
}

/// Parse a quantity field from its leading number (`3`, `2.5pcs`).
///
/// Unparseable or negative input becomes zero.
pub fn parse_quantity_input(text: &str) -> f64 {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if idx == 0 => {}
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    let value = text[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(0.0);
    0.0_f64.max(value) + 0.0
}
