//! # balance_report - Balance Table Reporter
//!
//! Loads the per-family variant JSON files and prints Markdown-style
//! cost/power/ratio tables plus a cross-game comparison. The formulas
//! live in `balance_core`; this crate owns file IO and formatting.

pub mod report;

use anyhow::{Context, Result};
use balance_core::{GameFamily, Variant};
use std::fs;
use std::path::Path;

/// Load and validate one family's variant collection.
///
/// Order is preserved from the file: index 0 is the baseline variant.
pub fn load_variants(path: &Path, family: GameFamily) -> Result<Vec<Variant>> {
    let json_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read variant file: {}", path.display()))?;

    let variants: Vec<Variant> = serde_json::from_str(&json_str)
        .with_context(|| format!("Failed to parse variant JSON: {}", path.display()))?;

    for (index, variant) in variants.iter().enumerate() {
        variant.validate(family, index).with_context(|| {
            format!("Invalid {} record in {}", family.label(), path.display())
        })?;
    }

    log::debug!(
        "{}: loaded {} variants from {}",
        family.label(),
        variants.len(),
        path.display()
    );

    Ok(variants)
}
