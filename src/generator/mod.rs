//! Summary text generation and number formatting.

mod format;
mod summary;

pub use format::{
    format_currency, format_date, format_decimal, format_dimension, format_quantity,
    group_thousands, round_half_away,
};
pub use summary::{generate_summary, SummaryWriter};
