//! JSON estimate and price list files.

use std::fs;
use std::path::Path;

use crate::error::{EstimateError, Result};
use crate::model::{Estimate, PriceList};

/// Parse an estimate from JSON text.
pub fn parse_estimate(content: &str, path: &Path) -> Result<Estimate> {
    serde_json::from_str(content).map_err(|e| EstimateError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a price list (`[{"label": .., "price": ..}, ..]`) from JSON text.
pub fn parse_price_list(content: &str, path: &Path) -> Result<PriceList> {
    serde_json::from_str(content).map_err(|e| EstimateError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load an estimate file.
pub fn load_estimate_file(path: &Path) -> Result<Estimate> {
    let content = read_non_empty(path)?;
    let estimate = parse_estimate(&content, path)?;
    tracing::debug!(
        cutting = estimate.cutting_items.len(),
        material = estimate.material_items.len(),
        "loaded estimate from {}",
        path.display()
    );
    Ok(estimate)
}

/// Load a price list file.
pub fn load_price_list_file(path: &Path) -> Result<PriceList> {
    let content = read_non_empty(path)?;
    let prices = parse_price_list(&content, path)?;
    tracing::debug!("loaded {} price preset(s) from {}", prices.len(), path.display());
    Ok(prices)
}

fn read_non_empty(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EstimateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(EstimateError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}
