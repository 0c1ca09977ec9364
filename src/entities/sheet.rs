use std::collections::HashMap;

use anyhow::{Result, ensure};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

/// Outer dimensions of a stock panel in mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetDims {
    pub length: f32,
    pub width: f32,
}

impl SheetDims {
    pub fn try_new(length: f32, width: f32) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0,
            "invalid sheet dimensions, length: {length}, width: {width}"
        );
        Ok(SheetDims { length, width })
    }

    pub fn area(&self) -> f32 {
        self.length * self.width
    }
}

/// The stock panel definition used by one material group.
/// The same definition is reused for every sheet the group consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockSheet {
    pub dims: SheetDims,
    pub material: String,
    pub thickness: f32,
}

/// Catalog of available stock panels, keyed by material and thickness.
#[derive(Clone, Debug, Default)]
pub struct SheetCatalog {
    entries: HashMap<(String, NotNan<f32>), SheetDims>,
}

impl SheetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the panel size available for a material and thickness,
    /// replacing any previous entry for that pair.
    pub fn insert(&mut self, material: &str, thickness: f32, dims: SheetDims) -> Result<()> {
        ensure!(thickness > 0.0, "invalid sheet thickness: {thickness}");
        self.entries
            .insert((material.to_string(), NotNan::new(thickness)?), dims);
        Ok(())
    }

    /// Exact lookup, no fallback across thicknesses.
    pub fn resolve(&self, material: &str, thickness: f32) -> Option<SheetDims> {
        let key = (material.to_string(), NotNan::new(thickness).ok()?);
        self.entries.get(&key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_must_be_positive() {
        assert!(SheetDims::try_new(2440.0, 1220.0).is_ok());
        assert!(SheetDims::try_new(0.0, 1220.0).is_err());
        assert!(SheetDims::try_new(2440.0, -5.0).is_err());
    }

    #[test]
    fn catalog_resolves_exact_pairs_only() {
        let mut catalog = SheetCatalog::new();
        let dims = SheetDims::try_new(2800.0, 2070.0).unwrap();
        catalog.insert("melamine", 18.0, dims).unwrap();

        assert_eq!(catalog.resolve("melamine", 18.0), Some(dims));
        assert_eq!(catalog.resolve("melamine", 19.0), None);
        assert_eq!(catalog.resolve("MDF", 18.0), None);
    }

    #[test]
    fn insert_rejects_invalid_thickness() {
        let mut catalog = SheetCatalog::new();
        let dims = SheetDims::try_new(2440.0, 1220.0).unwrap();
        assert!(catalog.insert("MDF", 0.0, dims).is_err());
        assert!(catalog.insert("MDF", f32::NAN, dims).is_err());
    }
}
