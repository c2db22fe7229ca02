//! Estimate - the editable state of one estimate.

use serde::{Deserialize, Serialize};

use super::{CustomerInfo, CuttingItem, MaterialItem};
use crate::parser::lenient;

/// Customer, item lists and rounding discount: the single source of truth
/// from which totals and the summary text are derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Estimate {
    /// Customer details.
    pub customer: CustomerInfo,
    /// Cutting rows in display order.
    pub cutting_items: Vec<CuttingItem>,
    /// Material rows in display order.
    pub material_items: Vec<MaterialItem>,
    /// Manual rounding discount on the gross total.
    #[serde(deserialize_with = "lenient::amount")]
    pub rounding_discount: f64,
}

impl Estimate {
    /// Create an empty estimate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a cutting row by id.
    pub fn find_cutting_item(&self, id: &str) -> Option<&CuttingItem> {
        self.cutting_items.iter().find(|item| item.id == id)
    }

    /// Find a cutting row by id for editing.
    pub fn find_cutting_item_mut(&mut self, id: &str) -> Option<&mut CuttingItem> {
        self.cutting_items.iter_mut().find(|item| item.id == id)
    }

    /// Find a material row by id.
    pub fn find_material_item(&self, id: &str) -> Option<&MaterialItem> {
        self.material_items.iter().find(|item| item.id == id)
    }

    /// Find a material row by id for editing.
    pub fn find_material_item_mut(&mut self, id: &str) -> Option<&mut MaterialItem> {
        self.material_items.iter_mut().find(|item| item.id == id)
    }

    /// Check if the estimate has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.cutting_items.is_empty() && self.material_items.is_empty()
    }
}
