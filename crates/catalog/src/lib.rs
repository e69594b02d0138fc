//! Price-list (catalog) domain module.
//!
//! Read-only price-list snapshots as consumed by the cost estimator and the
//! invoicing helpers. Persistence is owned by the surrounding application and
//! reaches this crate through [`CatalogProvider`].

pub mod catalog;
pub mod item;
pub mod seed;

pub use catalog::{Catalog, CatalogProvider};
pub use item::{CatalogItem, SizeTag, SizeVariant, UnitOfMeasure};
pub use seed::{SeedCatalog, default_price_list};
