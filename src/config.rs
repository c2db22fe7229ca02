//! Configuration constants and settings for the estimator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Placeholder for a cutting row without a label.
pub const DEFAULT_CUTTING_LABEL: &str = "Item Cutting";

/// Placeholder for a material row without a name.
pub const DEFAULT_MATERIAL_NAME: &str = "Material";

/// Rendered in place of an empty customer field.
pub const EMPTY_FIELD: &str = "-";

/// Maximum fraction digits when rendering areas (e.g. 0,125 m²).
pub const AREA_FRACTION_DIGITS: usize = 3;

/// Fixed decimals for length and width in the summary.
pub const DIMENSION_DECIMALS: usize = 2;

/// Decimals kept by a measurement field once editing is finished.
pub const DEFAULT_INPUT_DECIMALS: usize = 2;

/// How long the "copied" indicator stays on after a clipboard write.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Currency symbol for amounts (Indonesian Rupiah).
pub const CURRENCY_SYMBOL: &str = "Rp";

/// Separator between the currency symbol and the amount (no-break space).
pub const CURRENCY_SPACE: char = '\u{a0}';

/// Thousands grouping separator (id-ID).
pub const GROUP_SEPARATOR: char = '.';

/// Decimal mark (id-ID).
pub const DECIMAL_SEPARATOR: char = ',';

/// Horizontal rule used around the totals block.
pub const DIVIDER: &str = "--------------------------------";

/// Pricing mode of a cutting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PricingMode {
    /// Unit price per square meter.
    #[default]
    Area,
    /// Unit price per piece or job (lump-sum).
    Lumpsum,
}

impl PricingMode {
    /// Mode for the `is_lumpsum` switch.
    pub fn from_lumpsum(is_lumpsum: bool) -> Self {
        if is_lumpsum {
            PricingMode::Lumpsum
        } else {
            PricingMode::Area
        }
    }

    /// Unit suffix shown after a row title.
    pub fn suffix(&self) -> &'static str {
        match self {
            PricingMode::Area => "m²",
            PricingMode::Lumpsum => "Ls",
        }
    }
}

impl std::fmt::Display for PricingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
