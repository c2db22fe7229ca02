//! Money, number and date formatting in the id-ID locale.
//!
//! Currency has no fraction digits (`Rp 1.250.000`); plain numbers keep up
//! to a requested number of fraction digits with trailing zeros dropped
//! (`0,125`).

use chrono::{Datelike, NaiveDate};

use crate::config::{
    CURRENCY_SPACE, CURRENCY_SYMBOL, DECIMAL_SEPARATOR, DIMENSION_DECIMALS, GROUP_SEPARATOR,
};

/// Abbreviated month names (id-ID).
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Insert thousands separators into a run of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Round to `decimals` places, halves away from zero (`0.125` -> `0.13`).
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format an amount as Rupiah, rounded to a whole number.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!(
        "{}{}{}{}",
        sign,
        CURRENCY_SYMBOL,
        CURRENCY_SPACE,
        group_thousands(&digits)
    )
}

/// Format a plain number with up to `max_fraction_digits` decimals.
pub fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    let rounded = round_half_away(value.abs(), max_fraction_digits);
    let fixed = format!("{:.*}", max_fraction_digits, rounded);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Format a length or width with a fixed number of decimals (`2.00`).
pub fn format_dimension(value: f64) -> String {
    let rounded = round_half_away(value, DIMENSION_DECIMALS);
    format!("{:.*}", DIMENSION_DECIMALS, rounded)
}

/// Format a quantity the way it was entered (`1`, `2.5`).
pub fn format_quantity(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Format a date as `day month year` with an abbreviated month (`17 Okt 2026`).
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}
