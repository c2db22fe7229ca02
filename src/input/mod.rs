//! Normalisation of raw form text into the non-negative numbers the pricer trusts.

mod normalize;

pub use normalize::{
    finalize_decimal_input, format_currency_input, parse_currency_input, parse_decimal_input,
    parse_quantity_input,
};
