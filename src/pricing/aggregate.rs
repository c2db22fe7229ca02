//! Aggregation of row prices into estimate totals.

use super::{material_total, price_cutting_item};
use crate::model::{CuttingItem, Estimate, EstimateTotals, MaterialItem};

/// Sum of all cutting row prices.
pub fn cutting_subtotal(items: &[CuttingItem]) -> f64 {
    items.iter().map(price_cutting_item).sum()
}

/// Sum of all material row totals.
pub fn material_subtotal(items: &[MaterialItem]) -> f64 {
    items.iter().map(material_total).sum()
}

/// Compute every derived total of an estimate.
///
/// Recomputed from scratch on each call.
pub fn compute_totals(estimate: &Estimate) -> EstimateTotals {
    let cutting_subtotal = cutting_subtotal(&estimate.cutting_items);
    let material_subtotal = material_subtotal(&estimate.material_items);
    let gross_total = cutting_subtotal + material_subtotal;
    let rounding_discount = estimate.rounding_discount;

    EstimateTotals {
        cutting_subtotal,
        material_subtotal,
        gross_total,
        rounding_discount,
        grand_total: 0.0_f64.max(gross_total - rounding_discount) + 0.0,
    }
}
