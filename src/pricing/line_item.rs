//! Line-item pricer.
//!
//! Inputs are trusted to be already normalised (see [`crate::input`]); the
//! only guard applied here is the final floor at zero.

use crate::model::{CuttingItem, MaterialItem};

/// Gross price of a cutting row before discounts.
///
/// Lump-sum rows ignore length and width.
pub fn cutting_gross_price(item: &CuttingItem) -> f64 {
    if item.is_lumpsum {
        item.unit_price * item.quantity
    } else {
        item.piece_area() * item.quantity * item.unit_price
    }
}

/// Final price of a cutting row.
///
/// The flat discount is subtracted first, then the percentage is taken off
/// what remains. The result never goes below zero.
pub fn price_cutting_item(item: &CuttingItem) -> f64 {
    let gross = cutting_gross_price(item);
    let after_flat = gross - item.discount_flat;
    let after_percent = after_flat - after_flat * (item.discount_percent / 100.0);
    // `max` maps NaN to zero; adding zero turns -0.0 into 0.0.
    0.0_f64.max(after_percent) + 0.0
}

/// Total of a material row: quantity times unit price.
pub fn material_total(item: &MaterialItem) -> f64 {
    item.quantity * item.unit_price
}
