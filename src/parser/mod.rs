//! Estimate and price list file loading.

mod estimate_file;
pub mod lenient;

pub use estimate_file::{load_estimate_file, load_price_list_file, parse_estimate, parse_price_list};
