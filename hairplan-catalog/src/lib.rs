//! hairplan-catalog: static product catalog, generic-category resolution and user overrides

pub mod catalog;
pub mod overrides;

pub use catalog::{catalog_key, entries, entry, mapped_generics, resolve, CatalogEntry};
pub use overrides::{map_products, CatalogOverrides, MappedProduct, NOT_SET};
