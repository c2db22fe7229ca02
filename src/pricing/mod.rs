//! Line-item pricing and estimate totals.

mod aggregate;
mod line_item;

pub use aggregate::{compute_totals, cutting_subtotal, material_subtotal};
pub use line_item::{cutting_gross_price, material_total, price_cutting_item};
