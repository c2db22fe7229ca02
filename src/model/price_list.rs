//! Preset price table keyed by cutting label.

use serde::{Deserialize, Serialize};

/// One preset: a cutting label and its price per m².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePreset {
    /// Exact label offered as a suggestion.
    pub label: String,
    /// Price per m².
    pub price: f64,
}

impl PricePreset {
    /// Create a preset.
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// Built-in presets, grouped by material.
const BUILTIN_PRICES: &[(&str, f64)] = &[
    // Stainless steel
    ("PSS 0.5mm 1mm o2", 600_000.0),
    ("PSS 0.5mm 1mm n2", 750_000.0),
    ("PSS 1.1mm - 1.9mm o2", 750_000.0),
    ("PSS 1.1mm - 1.9mm n2", 900_000.0),
    ("PSS 2mm - 3mm o2", 1_250_000.0),
    // Mild steel
    ("PHG 0.5mm - 1.9mm", 600_000.0),
    ("PHG 2mm - 2.9mm", 750_000.0),
    ("PHG 4mm - 6mm", 900_000.0),
    ("PHG 6.1mm - 8mm", 1_250_000.0),
    ("PHG 8.1mm - 10mm", 1_500_000.0),
    // Acrylic
    ("Acrylic 1mm - 3mm", 250_000.0),
    ("Acrylic 4mm - 5mm", 450_000.0),
    ("Acrylic 6mm - 8mm", 650_000.0),
    ("Acrylic 10mm", 950_000.0),
    // Plywood / HMR
    ("Multi / Hmr 5mm - 10mm", 300_000.0),
    ("Multi / Hmr 5mm - 10mm + HPL", 350_000.0),
    ("Multi / Hmr 12mm - 15mm", 400_000.0),
    ("Multi / Hmr 12mm - 15mm + HPL", 450_000.0),
    ("Multi / Hmr 18mm - 20mm", 500_000.0),
    ("Multi / Hmr 18mm - 20mm + HPL", 550_000.0),
    // ACP
    ("ACP 2D", 150_000.0),
    ("ACP 2.5D", 250_000.0),
    ("ACP Tekuk", 50_000.0),
    // Solid wood (the trailing space is part of the label)
    ("Kayu / Solid Wood 2D m Lari", 450_000.0),
    ("Kayu / Solid Wood 2D ", 750_000.0),
    ("Kayu / Solid Wood 3D m Lari", 1_050_000.0),
    ("Kayu / Solid Wood 3D", 1_750_000.0),
    // PVC board
    ("PVC 2D 5mm - 10mm", 250_000.0),
    ("PVC 2D 12mm - 15mm", 350_000.0),
    ("PVC 2D 18mm - 20mm", 450_000.0),
    ("PVC 3D 9mm - 20mm", 1_300_000.0),
];

/// Immutable label-to-price mapping used to auto-fill unit prices.
///
/// Lookup is an exact, case-sensitive match on the label; the first preset
/// with a given label wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList {
    presets: Vec<PricePreset>,
}

impl PriceList {
    /// Create a price list from presets.
    pub fn new(presets: Vec<PricePreset>) -> Self {
        Self { presets }
    }

    /// The built-in price table.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_PRICES
                .iter()
                .map(|&(label, price)| PricePreset::new(label, price))
                .collect(),
        )
    }

    /// Price for an exactly matching label.
    pub fn lookup(&self, label: &str) -> Option<f64> {
        self.presets
            .iter()
            .find(|preset| preset.label == label)
            .map(|preset| preset.price)
    }

    /// All presets in table order.
    pub fn presets(&self) -> &[PricePreset] {
        &self.presets
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if there are no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let prices = PriceList::builtin();
        assert_eq!(prices.len(), 31);
        assert_eq!(prices.lookup("Acrylic 10mm"), Some(950_000.0));
        assert_eq!(prices.lookup("PVC 3D 9mm - 20mm"), Some(1_300_000.0));
    }

    #[test]
    fn test_lookup_is_exact() {
        let prices = PriceList::builtin();
        assert_eq!(prices.lookup("acrylic 10mm"), None);
        assert_eq!(prices.lookup("Acrylic 10mm "), None);
        assert_eq!(prices.lookup(""), None);
        assert_eq!(prices.lookup("Kayu / Solid Wood 2D "), Some(750_000.0));
        assert_eq!(prices.lookup("Kayu / Solid Wood 2D"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let prices = PriceList::new(vec![
            PricePreset::new("ACP 2D", 1.0),
            PricePreset::new("ACP 2D", 2.0),
        ]);
        assert_eq!(prices.lookup("ACP 2D"), Some(1.0));
    }
}
