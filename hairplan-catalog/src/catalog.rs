//! Static product catalog and the generic-category → catalog-key table.
//!
//! Lookup is two hops: generic label → internal key → entry. Either hop may
//! miss; a miss is an ordinary `None`, the caller lets the user type a
//! product name instead.

use hairplan_core::products;
use serde::Serialize;

/// A real product the routine can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub tags: &'static [&'static str],
}

const SHOP: &str = "https://blondis.us/shop/";

/// Internal key → entry, in display order.
static CATALOG: &[(&str, CatalogEntry)] = &[
    (
        "Sulfate-Free Shampoo",
        CatalogEntry {
            name: "BLONDIS™ New York Luxurious Sulfate-Free Shampoo",
            url: SHOP,
            tags: &["gentle", "hydrating", "color/keratin safe"],
        },
    ),
    (
        "Rich Conditioner",
        CatalogEntry {
            name: "BLONDIS™ New York Luxurious Rich Conditioner",
            url: SHOP,
            tags: &["repair", "moisture", "daily"],
        },
    ),
    (
        "Clarifying Shampoo",
        CatalogEntry {
            name: "BLONDIS™ New York Luxurious Clarifying Shampoo",
            url: SHOP,
            tags: &["clarify", "reset", "buildup"],
        },
    ),
    (
        "Reparative Hair Mask",
        CatalogEntry {
            name: "BLONDIS™ Luxurious Reparative Hair Mask",
            url: SHOP,
            tags: &["bond-building", "damage repair", "weekly"],
        },
    ),
    (
        "Shine Serum",
        CatalogEntry {
            name: "BLONDIS™ Luxurious Reparative Hair Shine Serum",
            url: SHOP,
            tags: &["finish", "anti-frizz", "gloss"],
        },
    ),
    (
        "Curl Crème",
        CatalogEntry {
            name: "BLONDIS™ New York Curl Crème",
            url: SHOP,
            tags: &["define", "moisture", "hold-light"],
        },
    ),
    (
        "Purple Shampoo",
        CatalogEntry {
            name: "Blond Resolution Purple Shampoo",
            url: "https://looliacloset.com/collections/blondis-new-york",
            tags: &["tone brass", "blonde care", "weekly"],
        },
    ),
    (
        "Smoothing System",
        CatalogEntry {
            name: "BLONDIS™ Multi Protein Smoothing System (0% formaldehyde)",
            url: "https://blondisnylb.com/at-home-service",
            tags: &["salon", "smoothing", "keratin-safe"],
        },
    ),
    (
        "Fiks",
        CatalogEntry {
            name: "BLONDIS™ New York FIKS",
            url: "https://blondis.us/",
            tags: &["treatment"],
        },
    ),
];

/// Generic recommendation label → internal catalog key.
static GENERIC_TO_KEY: &[(&str, &str)] = &[
    // shampoos
    (products::HYDRATING_SHAMPOO, "Sulfate-Free Shampoo"),
    (products::GENTLE_DAILY_SHAMPOO, "Sulfate-Free Shampoo"),
    (products::BALANCING_SHAMPOO, "Sulfate-Free Shampoo"),
    (products::CLARIFYING_WEEKLY, "Clarifying Shampoo"),
    (products::CLARIFYING_EVERY_2_4_WEEKS, "Clarifying Shampoo"),
    // conditioners & masks
    (products::LIGHTWEIGHT_CONDITIONER, "Rich Conditioner"),
    (products::REPAIR_CONDITIONER, "Rich Conditioner"),
    (products::BOND_BUILDING_MASK, "Reparative Hair Mask"),
    // stylers & finish
    (products::LIGHT_CURL_STYLER, "Curl Crème"),
    (products::CURL_CREAM_GEL, "Curl Crème"),
    (products::ANTI_HUMIDITY_FINISH, "Shine Serum"),
    // tone
    (products::PURPLE_TONING_SHAMPOO, "Purple Shampoo"),
];

/// First hop: which catalog key a generic label maps to, if any.
pub fn catalog_key(generic: &str) -> Option<&'static str> {
    GENERIC_TO_KEY
        .iter()
        .find(|(g, _)| *g == generic)
        .map(|(_, key)| *key)
}

/// Look up an entry by its internal key.
pub fn entry(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|(k, _)| *k == key).map(|(_, e)| e)
}

/// Resolve a generic recommendation label to a catalog entry.
pub fn resolve(generic: &str) -> Option<&'static CatalogEntry> {
    catalog_key(generic).and_then(entry)
}

/// All entries with their keys, in catalog order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static CatalogEntry)> {
    CATALOG.iter().map(|(k, e)| (*k, e))
}

/// All generic labels that have a catalog key.
pub fn mapped_generics() -> impl Iterator<Item = &'static str> {
    GENERIC_TO_KEY.iter().map(|(g, _)| *g)
}
