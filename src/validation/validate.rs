//! Validation of loaded estimates.
//!
//! The pricer trusts its inputs to be finite and non-negative; files and
//! other untrusted sources are checked here first.

use std::collections::HashSet;

use crate::model::Estimate;
use crate::pricing::{compute_totals, cutting_gross_price};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole estimate.
pub fn validate_estimate(estimate: &Estimate) -> ValidationResult {
    let mut result = ValidationResult::ok();

    result.merge(validate_cutting_items(estimate));
    result.merge(validate_material_items(estimate));

    check_amount(&mut result, "Rounding discount", estimate.rounding_discount);

    if result.passed {
        let totals = compute_totals(estimate);
        if estimate.rounding_discount > totals.gross_total {
            result.add_warning(format!(
                "Rounding discount {} exceeds gross total {}; grand total is clamped to 0",
                estimate.rounding_discount, totals.gross_total
            ));
        }
    }

    result
}

fn validate_cutting_items(estimate: &Estimate) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut ids = HashSet::new();

    for (idx, item) in estimate.cutting_items.iter().enumerate() {
        let row = format!("Cutting {}", idx + 1);

        if !ids.insert(item.id.as_str()) {
            result.add_error(format!("{}: Duplicate id '{}'", row, item.id));
        }

        check_amount(&mut result, &format!("{} length", row), item.length);
        check_amount(&mut result, &format!("{} width", row), item.width);
        check_amount(&mut result, &format!("{} quantity", row), item.quantity);
        check_amount(&mut result, &format!("{} unit price", row), item.unit_price);
        check_amount(&mut result, &format!("{} discount %", row), item.discount_percent);
        check_amount(&mut result, &format!("{} discount", row), item.discount_flat);

        if item.discount_percent > 100.0 {
            result.add_warning(format!(
                "{}: Discount {}% is above 100%",
                row, item.discount_percent
            ));
        }

        let gross = cutting_gross_price(item);
        if gross.is_finite() && item.discount_flat > 0.0 && item.discount_flat > gross {
            result.add_warning(format!(
                "{}: Discount {} exceeds price {}; row total is clamped to 0",
                row, item.discount_flat, gross
            ));
        }

        if item.is_lumpsum && (item.length > 0.0 || item.width > 0.0) {
            result.add_warning(format!(
                "{}: Lump-sum row has dimensions ({} x {}) which are ignored",
                row, item.length, item.width
            ));
        }
    }

    result
}

fn validate_material_items(estimate: &Estimate) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut ids = HashSet::new();

    for (idx, item) in estimate.material_items.iter().enumerate() {
        let row = format!("Material {}", idx + 1);

        if !ids.insert(item.id.as_str()) {
            result.add_error(format!("{}: Duplicate id '{}'", row, item.id));
        }

        check_amount(&mut result, &format!("{} quantity", row), item.quantity);
        check_amount(&mut result, &format!("{} unit price", row), item.unit_price);
    }

    result
}

/// Every number must be finite and non-negative.
fn check_amount(result: &mut ValidationResult, field: &str, value: f64) {
    if !value.is_finite() {
        result.add_error(format!("{}: Not a number ({})", field, value));
    } else if value < 0.0 {
        result.add_error(format!("{}: Negative value {}", field, value));
    }
}
