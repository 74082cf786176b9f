//! # Materials Catalog
//!
//! Unit costs (R$ per m³) for earthwork materials.
//!
//! The default catalog holds fill (`aterro`), crushed stone (`brita`) and
//! sand (`areia`). Callers can layer their own prices on top; an override
//! replaces the default price, a new name is appended at the end.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{MaterialCatalog, DEFAULT_CATALOG};
//!
//! assert_eq!(DEFAULT_CATALOG.get("brita").unwrap(), 150.0);
//!
//! let catalog = MaterialCatalog::default()
//!     .with_material("brita", 170.0).unwrap()
//!     .with_material("argila", 45.0).unwrap();
//! assert_eq!(catalog.get("brita").unwrap(), 170.0);
//!
//! // Unknown names fall back to aterro
//! assert_eq!(catalog.resolve("cimento").name, "aterro");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material used when the requested one is unknown or blank
pub const DEFAULT_MATERIAL: &str = "aterro";

/// Price of the fallback material when a custom catalog lacks it
pub const DEFAULT_MATERIAL_COST: f64 = 80.0;

/// Built-in prices per m³, in display order
pub const DEFAULT_MATERIALS: [(&str, f64); 3] = [
    ("aterro", 80.0),
    ("brita", 150.0),
    ("areia", 60.0),
];

/// Process-wide read-only default catalog
pub static DEFAULT_CATALOG: Lazy<MaterialCatalog> = Lazy::new(MaterialCatalog::default);

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub name: String,
    /// Unit cost in R$ per m³
    pub cost_per_m3: f64,
}

/// Ordered mapping from material name to unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    entries: Vec<MaterialCost>,
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog {
            entries: DEFAULT_MATERIALS
                .iter()
                .map(|(name, cost)| MaterialCost {
                    name: name.to_string(),
                    cost_per_m3: *cost,
                })
                .collect(),
        }
    }
}

impl MaterialCatalog {
    /// Add or override a material price.
    ///
    /// Names are stored lowercase. The cost must be positive.
    pub fn with_material(mut self, name: impl Into<String>, cost_per_m3: f64) -> CalcResult<Self> {
        let name = normalize(&name.into());
        if name.is_empty() {
            return Err(CalcError::invalid_input("name", "", "Material name cannot be empty"));
        }
        if cost_per_m3.is_nan() || cost_per_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "cost_per_m3",
                cost_per_m3.to_string(),
                "Unit cost must be positive",
            ));
        }

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.cost_per_m3 = cost_per_m3,
            None => self.entries.push(MaterialCost { name, cost_per_m3 }),
        }
        Ok(self)
    }

    /// Strict lookup.
    pub fn get(&self, name: &str) -> CalcResult<f64> {
        self.find(name)
            .map(|e| e.cost_per_m3)
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Lenient lookup: unknown or blank names resolve to `aterro`.
    pub fn resolve(&self, name: &str) -> MaterialCost {
        if let Some(entry) = self.find(name) {
            return entry.clone();
        }
        MaterialCost {
            name: DEFAULT_MATERIAL.to_string(),
            cost_per_m3: self.get(DEFAULT_MATERIAL).unwrap_or(DEFAULT_MATERIAL_COST),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialCost> {
        self.entries.iter()
    }

    fn find(&self, name: &str) -> Option<&MaterialCost> {
        let name = normalize(name);
        self.entries.iter().find(|e| e.name == name)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &MaterialCatalog) -> Vec<&str> {
        catalog.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_default_prices() {
        assert_eq!(DEFAULT_CATALOG.get("aterro").unwrap(), 80.0);
        assert_eq!(DEFAULT_CATALOG.get("brita").unwrap(), 150.0);
        assert_eq!(DEFAULT_CATALOG.get("areia").unwrap(), 60.0);
        assert_eq!(names(&DEFAULT_CATALOG), vec!["aterro", "brita", "areia"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(DEFAULT_CATALOG.get("  AREIA ").unwrap(), 60.0);
        assert!(DEFAULT_CATALOG.contains("Brita"));
    }

    #[test]
    fn test_unknown_material_strict() {
        let err = DEFAULT_CATALOG.get("cimento").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_unknown_material_falls_back_to_aterro() {
        let resolved = DEFAULT_CATALOG.resolve("cimento");
        assert_eq!(resolved.name, "aterro");
        assert_eq!(resolved.cost_per_m3, 80.0);

        assert_eq!(DEFAULT_CATALOG.resolve("").name, "aterro");
    }

    #[test]
    fn test_overrides() {
        let catalog = MaterialCatalog::default()
            .with_material("Areia", 75.0)
            .unwrap()
            .with_material("argila", 45.0)
            .unwrap();

        assert_eq!(catalog.get("areia").unwrap(), 75.0);
        assert_eq!(names(&catalog), vec!["aterro", "brita", "areia", "argila"]);
        // Defaults stay untouched
        assert_eq!(DEFAULT_CATALOG.get("areia").unwrap(), 60.0);
    }

    #[test]
    fn test_override_rejects_bad_cost() {
        assert!(MaterialCatalog::default().with_material("brita", 0.0).is_err());
        assert!(MaterialCatalog::default().with_material("brita", f64::NAN).is_err());
        assert!(MaterialCatalog::default().with_material(" ", 10.0).is_err());
    }

    #[test]
    fn test_fallback_without_aterro_entry() {
        let json = r#"{ "entries": [ { "name": "brita", "cost_per_m3": 150.0 } ] }"#;
        let catalog: MaterialCatalog = serde_json::from_str(json).unwrap();
        let resolved = catalog.resolve("areia");
        assert_eq!(resolved.name, DEFAULT_MATERIAL);
        assert_eq!(resolved.cost_per_m3, DEFAULT_MATERIAL_COST);
    }
}
