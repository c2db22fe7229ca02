//! Serde helpers accepting numbers either as JSON numbers or as form text.
//!
//! Text is normalised by [`crate::input`]; rejected text becomes zero.

use serde::{Deserialize, Deserializer};

use crate::input::{parse_currency_input, parse_decimal_input};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize an amount (`450000` or `"450.000"`).
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => value,
        Some(NumberOrText::Text(text)) => parse_currency_input(text.trim()).unwrap_or(0.0),
        None => 0.0,
    })
}

/// Deserialize a measurement, quantity or percentage (`1.5` or `"1.5"`).
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => value,
        Some(NumberOrText::Text(text)) => parse_decimal_input(text.trim()).unwrap_or(0.0),
        None => 0.0,
    })
}
