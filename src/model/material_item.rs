//! MaterialItem - flat-priced material sold alongside the cutting.

use serde::{Deserialize, Serialize};

use super::generate_id;
use crate::config::DEFAULT_MATERIAL_NAME;
use crate::parser::lenient;

/// A material row: quantity times unit price, no discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialItem {
    /// Opaque row identifier.
    pub id: String,
    /// Material name.
    pub name: String,
    /// Quantity.
    #[serde(deserialize_with = "lenient::decimal")]
    pub quantity: f64,
    /// Price per unit.
    #[serde(deserialize_with = "lenient::amount")]
    pub unit_price: f64,
}

impl Default for MaterialItem {
    fn default() -> Self {
        Self {
            id: generate_id(),
            name: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }
}

impl MaterialItem {
    /// Create a material row.
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
            ..Default::default()
        }
    }

    /// Name for display, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_MATERIAL_NAME
        } else {
            &self.name
        }
    }
}
