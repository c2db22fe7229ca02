//! cut-estimate - Price estimates for cutting/fabrication jobs.
//!
//! This library prices cutting jobs (by area or lump-sum) and flat-priced
//! materials, applies per-row and rounding discounts, and renders a
//! shareable text summary.
//!
//! # Example
//!
//! ```no_run
//! use cut_estimate::{compute_totals, generate_summary, load_estimate_file};
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let estimate = load_estimate_file(Path::new("estimate.json")).unwrap();
//! let totals = compute_totals(&estimate);
//! let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! println!("{}", generate_summary(&estimate, &totals, date));
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod model;
pub mod parser;
pub mod pricing;
pub mod session;
pub mod validation;

// Re-exports for convenience
pub use clipboard::{copy_to_clipboard, Clipboard, CopyIndicator, MemoryClipboard};
pub use config::PricingMode;
pub use error::{ErrorCode, EstimateError, Result};
pub use generator::{format_currency, format_decimal, generate_summary};
pub use model::{
    CustomerInfo, CuttingItem, Estimate, EstimateTotals, MaterialItem, PriceList, PricePreset,
};
pub use parser::{load_estimate_file, load_price_list_file};
pub use pricing::{compute_totals, material_total, price_cutting_item};
pub use session::{CuttingField, MaterialField, Session};
pub use validation::{validate_estimate, ValidationResult};

/// Load an estimate file and render its summary.
///
/// Runs the whole pipeline:
/// 1. Load the estimate
/// 2. Validate it (warnings are logged, errors abort with `EstimateError::Validation`)
/// 3. Compute the totals
/// 4. Generate the summary text
///
/// # Arguments
///
/// * `input_path` - Path to the estimate JSON file
/// * `date` - Date printed in the summary header
pub fn summarize_estimate_file(
    input_path: &std::path::Path,
    date: chrono::NaiveDate,
) -> Result<String> {
    let estimate = load_estimate_file(input_path)?;

    let validation = validate_estimate(&estimate);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for err in &validation.errors {
        tracing::error!("{}", err);
    }
    if !validation.passed {
        return Err(EstimateError::Validation {
            errors: validation.errors,
        });
    }

    let totals = compute_totals(&estimate);
    Ok(generate_summary(&estimate, &totals, date))
}
