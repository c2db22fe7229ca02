//! Data model types for cutting estimates.

mod customer;
mod cutting_item;
mod estimate;
mod material_item;
mod price_list;
mod totals;

pub use customer::CustomerInfo;
pub use cutting_item::CuttingItem;
pub use estimate::Estimate;
pub use material_item::MaterialItem;
pub use price_list::{PriceList, PricePreset};
pub use totals::EstimateTotals;

/// Generate an opaque, unique row identifier.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
