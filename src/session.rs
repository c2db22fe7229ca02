//! One estimating session: the editable estimate plus the operations the
//! form exposes on it.
//!
//! Totals and summary text are never stored; every read recomputes them
//! from the current item lists.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use crate::clipboard::{copy_to_clipboard, Clipboard, CopyIndicator};
use crate::error::{EstimateError, Result};
use crate::generator::generate_summary;
use crate::model::{CuttingItem, Estimate, EstimateTotals, MaterialItem, PriceList};
use crate::pricing::compute_totals;

/// A numeric field of a cutting row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CuttingField {
    Length(f64),
    Width(f64),
    Quantity(f64),
    UnitPrice(f64),
    DiscountPercent(f64),
    DiscountFlat(f64),
}

/// An editable field of a material row.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialField {
    Name(String),
    Quantity(f64),
    UnitPrice(f64),
}

/// Editable estimate with its price list and copy indicator.
#[derive(Debug, Clone)]
pub struct Session {
    estimate: Estimate,
    price_list: PriceList,
    indicator: CopyIndicator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PriceList::builtin())
    }
}

impl Session {
    /// Start a session with one blank cutting row.
    pub fn new(price_list: PriceList) -> Self {
        let mut session = Self::from_estimate(Estimate::new(), price_list);
        session.add_cutting_item();
        session
    }

    /// Continue editing an existing estimate.
    pub fn from_estimate(estimate: Estimate, price_list: PriceList) -> Self {
        Self {
            estimate,
            price_list,
            indicator: CopyIndicator::default(),
        }
    }

    /// Current estimate.
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Consume the session, keeping the estimate.
    pub fn into_estimate(self) -> Estimate {
        self.estimate
    }

    /// Price list used for label lookups.
    pub fn price_list(&self) -> &PriceList {
        &self.price_list
    }

    // === Customer ===

    /// Set the customer name.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.estimate.customer.name = name.into();
    }

    /// Set the customer contact number.
    pub fn set_contact_number(&mut self, number: impl Into<String>) {
        self.estimate.customer.contact_number = number.into();
    }

    // === Cutting rows ===

    /// Append a blank cutting row and return its id.
    pub fn add_cutting_item(&mut self) -> String {
        let item = CuttingItem::new();
        let id = item.id.clone();
        self.estimate.cutting_items.push(item);
        debug!(id = %id, "cutting row added");
        id
    }

    /// Remove a cutting row.
    pub fn remove_cutting_item(&mut self, id: &str) -> Option<CuttingItem> {
        let idx = self.estimate.cutting_items.iter().position(|item| item.id == id)?;
        debug!(id, "cutting row removed");
        Some(self.estimate.cutting_items.remove(idx))
    }

    /// Set one numeric field of a cutting row.
    pub fn update_cutting_item(&mut self, id: &str, field: CuttingField) -> Result<()> {
        let item = self.cutting_item_mut(id)?;
        match field {
            CuttingField::Length(v) => item.length = v,
            CuttingField::Width(v) => item.width = v,
            CuttingField::Quantity(v) => item.quantity = v,
            CuttingField::UnitPrice(v) => item.unit_price = v,
            CuttingField::DiscountPercent(v) => item.discount_percent = v,
            CuttingField::DiscountFlat(v) => item.discount_flat = v,
        }
        debug!(id, ?field, "cutting row updated");
        Ok(())
    }

    /// Set the label of a cutting row.
    ///
    /// A label matching a preset fills in its price and switches the row to
    /// area pricing; any other label leaves the price alone.
    pub fn set_cutting_label(&mut self, id: &str, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        let preset = self.price_list.lookup(&label);
        let item = self.cutting_item_mut(id)?;

        if let Some(price) = preset {
            item.unit_price = price;
            item.is_lumpsum = false;
            debug!(id, label = %label, price, "preset price applied");
        }
        item.label = label;
        Ok(())
    }

    /// Switch a cutting row between area and lump-sum pricing.
    ///
    /// Switching to lump-sum clears the price. Switching back restores the
    /// preset price for the row's label, or keeps the current price.
    pub fn set_lumpsum(&mut self, id: &str, is_lumpsum: bool) -> Result<()> {
        let label = self.cutting_item(id)?.label.clone();
        let preset = self.price_list.lookup(&label);
        let item = self.cutting_item_mut(id)?;

        if is_lumpsum {
            item.unit_price = 0.0;
        } else if let Some(price) = preset {
            item.unit_price = price;
        }
        item.is_lumpsum = is_lumpsum;
        debug!(id, is_lumpsum, "pricing mode changed");
        Ok(())
    }

    /// Fill zero-priced area rows whose label matches a preset.
    ///
    /// Returns the number of rows filled.
    pub fn fill_preset_prices(&mut self) -> usize {
        let mut filled = 0;
        for item in &mut self.estimate.cutting_items {
            if item.is_lumpsum || item.unit_price != 0.0 {
                continue;
            }
            if let Some(price) = self.price_list.lookup(&item.label) {
                item.unit_price = price;
                filled += 1;
            }
        }
        debug!(filled, "preset prices filled");
        filled
    }

    // === Material rows ===

    /// Append a blank material row and return its id.
    pub fn add_material_item(&mut self) -> String {
        let item = MaterialItem::default();
        let id = item.id.clone();
        self.estimate.material_items.push(item);
        debug!(id = %id, "material row added");
        id
    }

    /// Remove a material row.
    pub fn remove_material_item(&mut self, id: &str) -> Option<MaterialItem> {
        let idx = self.estimate.material_items.iter().position(|item| item.id == id)?;
        debug!(id, "material row removed");
        Some(self.estimate.material_items.remove(idx))
    }

    /// Set one field of a material row.
    pub fn update_material_item(&mut self, id: &str, field: MaterialField) -> Result<()> {
        let item = self
            .estimate
            .find_material_item_mut(id)
            .ok_or_else(|| not_found(id))?;
        match field {
            MaterialField::Name(name) => item.name = name,
            MaterialField::Quantity(v) => item.quantity = v,
            MaterialField::UnitPrice(v) => item.unit_price = v,
        }
        debug!(id, "material row updated");
        Ok(())
    }

    // === Totals and output ===

    /// Set the rounding discount; negative input counts as zero.
    pub fn set_rounding_discount(&mut self, amount: f64) {
        self.estimate.rounding_discount = 0.0_f64.max(amount) + 0.0;
    }

    /// Totals for the current rows.
    pub fn totals(&self) -> EstimateTotals {
        compute_totals(&self.estimate)
    }

    /// Summary text for the current rows.
    pub fn summary(&self, date: NaiveDate) -> String {
        generate_summary(&self.estimate, &self.totals(), date)
    }

    /// Copy the summary to `clipboard` and turn on the copied indicator.
    pub fn copy_summary(
        &mut self,
        clipboard: &mut dyn Clipboard,
        date: NaiveDate,
        now: Instant,
    ) -> Result<()> {
        let text = self.summary(date);
        copy_to_clipboard(clipboard, &text, &mut self.indicator, now)
    }

    /// Check if the copied indicator is on at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.indicator.is_copied(now)
    }

    fn cutting_item(&self, id: &str) -> Result<&CuttingItem> {
        self.estimate.find_cutting_item(id).ok_or_else(|| not_found(id))
    }

    fn cutting_item_mut(&mut self, id: &str) -> Result<&mut CuttingItem> {
        self.estimate
            .find_cutting_item_mut(id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> EstimateError {
    EstimateError::ItemNotFound { id: id.to_string() }
}
