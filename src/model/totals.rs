//! Derived totals of an estimate.

use serde::Serialize;

/// Totals derived from the item lists and the rounding discount.
///
/// Always produced by [`crate::pricing::compute_totals`]; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EstimateTotals {
    /// Sum of all cutting rows.
    pub cutting_subtotal: f64,
    /// Sum of all material rows.
    pub material_subtotal: f64,
    /// Cutting plus material.
    pub gross_total: f64,
    /// Manual rounding discount.
    pub rounding_discount: f64,
    /// Gross total minus rounding discount, floored at zero.
    pub grand_total: f64,
}

impl EstimateTotals {
    /// Check if a rounding discount is applied.
    pub fn has_rounding_discount(&self) -> bool {
        self.rounding_discount > 0.0
    }
}
