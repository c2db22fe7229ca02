//! CuttingItem - one cutting job priced by area or lump-sum.

use serde::{Deserialize, Serialize};

use super::generate_id;
use crate::config::{PricingMode, DEFAULT_CUTTING_LABEL};
use crate::parser::lenient;

/// A single cutting job on the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuttingItem {
    /// Opaque row identifier.
    pub id: String,
    /// Job description, usually a material/thickness label.
    pub label: String,
    /// Length in meters (ignored for lump-sum rows).
    #[serde(deserialize_with = "lenient::decimal")]
    pub length: f64,
    /// Width in meters (ignored for lump-sum rows).
    #[serde(deserialize_with = "lenient::decimal")]
    pub width: f64,
    /// Piece count, or lump-sum count.
    #[serde(deserialize_with = "lenient::decimal")]
    pub quantity: f64,
    /// Price per m², or per unit when lump-sum.
    #[serde(deserialize_with = "lenient::amount")]
    pub unit_price: f64,
    /// Percentage discount applied after the flat discount.
    #[serde(deserialize_with = "lenient::decimal")]
    pub discount_percent: f64,
    /// Flat discount subtracted before the percentage.
    #[serde(deserialize_with = "lenient::amount")]
    pub discount_flat: f64,
    /// Lump-sum pricing switch.
    pub is_lumpsum: bool,
}

impl Default for CuttingItem {
    fn default() -> Self {
        Self {
            id: generate_id(),
            label: String::new(),
            length: 0.0,
            width: 0.0,
            quantity: 1.0,
            unit_price: 0.0,
            discount_percent: 0.0,
            discount_flat: 0.0,
            is_lumpsum: false,
        }
    }
}

impl CuttingItem {
    /// Create a blank area-mode row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area-mode row.
    pub fn area(
        label: impl Into<String>,
        length: f64,
        width: f64,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self {
            label: label.into(),
            length,
            width,
            quantity,
            unit_price,
            ..Default::default()
        }
    }

    /// Create a lump-sum row.
    pub fn lumpsum(label: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            label: label.into(),
            quantity,
            unit_price,
            is_lumpsum: true,
            ..Default::default()
        }
    }

    /// Set both discounts.
    pub fn with_discounts(mut self, discount_percent: f64, discount_flat: f64) -> Self {
        self.discount_percent = discount_percent;
        self.discount_flat = discount_flat;
        self
    }

    /// Pricing mode of this row.
    pub fn mode(&self) -> PricingMode {
        PricingMode::from_lumpsum(self.is_lumpsum)
    }

    /// Area of a single piece in m².
    pub fn piece_area(&self) -> f64 {
        self.length * self.width
    }

    /// Area of all pieces in m².
    pub fn total_area(&self) -> f64 {
        self.piece_area() * self.quantity
    }

    /// Check if either discount is set.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0.0 || self.discount_flat > 0.0
    }

    /// Label for display, falling back to a placeholder.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            DEFAULT_CUTTING_LABEL
        } else {
            &self.label
        }
    }
}
