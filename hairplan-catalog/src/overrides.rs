//! User-typed product names for generic categories, and the per-product
//! mapping rows shown next to the recommendations.

use std::collections::BTreeMap;

use hairplan_core::{products, RecommendationBundle};
use serde::{Deserialize, Serialize};

use crate::catalog::{resolve, CatalogEntry};

/// Text shown for a category the user has not mapped yet.
pub const NOT_SET: &str = "(not set)";

/// Generic category → product name the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogOverrides(BTreeMap<String, String>);

impl Default for CatalogOverrides {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            products::BOND_BUILDING_MASK.to_string(),
            "Blondis NY Reparative Hair Mask".to_string(),
        );
        Self(map)
    }
}

impl CatalogOverrides {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the product name for a category. A blank name clears the entry.
    pub fn set(&mut self, generic: impl Into<String>, product: impl Into<String>) {
        let generic = generic.into();
        let product = product.into();
        if product.trim().is_empty() {
            self.0.remove(&generic);
        } else {
            self.0.insert(generic, product.trim().to_string());
        }
    }

    pub fn remove(&mut self, generic: &str) -> Option<String> {
        self.0.remove(generic)
    }

    pub fn get(&self, generic: &str) -> Option<&str> {
        self.0.get(generic).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `"<generic> → <product>"`, the line a user copies out of the mapper.
    pub fn mapping_line(&self, generic: &str) -> String {
        format!("{} → {}", generic, self.get(generic).unwrap_or(NOT_SET))
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for CatalogOverrides {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// One recommended category with whatever it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedProduct {
    pub generic: String,
    pub manual: Option<String>,
    pub catalog: Option<&'static CatalogEntry>,
}

impl MappedProduct {
    /// The user's name wins over the catalog's.
    pub fn display_name(&self) -> Option<&str> {
        self.manual
            .as_deref()
            .or_else(|| self.catalog.map(|e| e.name))
    }

    pub fn is_mapped(&self) -> bool {
        self.display_name().is_some()
    }
}

/// Build one mapping row per recommended category.
pub fn map_products(rec: &RecommendationBundle, overrides: &CatalogOverrides) -> Vec<MappedProduct> {
    rec.products()
        .iter()
        .map(|generic| MappedProduct {
            generic: generic.clone(),
            manual: overrides.get(generic).map(str::to_string),
            catalog: resolve(generic),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hairplan_core::{evaluate, HairType, Profile};

    #[test]
    fn test_default_seeds_bond_mask() {
        let o = CatalogOverrides::default();
        assert_eq!(o.get(products::BOND_BUILDING_MASK), Some("Blondis NY Reparative Hair Mask"));
        assert_eq!(o.len(), 1);
    }

    #[test]
    fn test_mapping_line() {
        let mut o = CatalogOverrides::empty();
        assert_eq!(o.mapping_line("Lightweight conditioner"), "Lightweight conditioner → (not set)");
        o.set("Lightweight conditioner", "  Silk Rinse  ");
        assert_eq!(o.mapping_line("Lightweight conditioner"), "Lightweight conditioner → Silk Rinse");
    }

    #[test]
    fn test_blank_set_clears() {
        let mut o = CatalogOverrides::default();
        o.set(products::BOND_BUILDING_MASK, " ");
        assert!(o.is_empty());
    }

    #[test]
    fn test_map_products_prefers_manual_name() {
        let p = Profile {
            hair_type: HairType::Straight,
            ..Profile::default()
        }
        .with_concern(hairplan_core::Concern::HeatStylingOften);
        let rec = evaluate(&p);

        let mut o = CatalogOverrides::empty();
        o.set(products::LIGHTWEIGHT_CONDITIONER, "My Conditioner");
        let rows = map_products(&rec, &o);
        assert_eq!(rows.len(), rec.products().len());

        let cond = rows
            .iter()
            .find(|r| r.generic == products::LIGHTWEIGHT_CONDITIONER)
            .unwrap();
        assert_eq!(cond.display_name(), Some("My Conditioner"));
        assert!(cond.catalog.is_some());

        let heat = rows.iter().find(|r| r.generic == products::HEAT_PROTECTANT).unwrap();
        assert!(!heat.is_mapped());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let json = serde_json::to_string(&CatalogOverrides::default()).unwrap();
        assert_eq!(
            json,
            r#"{"Bond-building mask (1×/week)":"Blondis NY Reparative Hair Mask"}"#
        );
        let back: CatalogOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CatalogOverrides::default());
    }
}
