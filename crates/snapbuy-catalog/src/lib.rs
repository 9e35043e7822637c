//! Catalog collaborator for the SnapBuy storefront.
//!
//! This crate provides:
//! - `CatalogProvider` - the async lookup contract screens fetch products through
//! - `CatalogError` - failures surfaced to the caller unchanged
//! - `wire` - the public demo catalog's JSON shape and dollar price conversion
//! - `InMemoryCatalog` - a provider over a fixed product list or JSON fixture

mod error;
mod memory;
mod provider;
pub mod wire;

pub use error::CatalogError;
pub use memory::InMemoryCatalog;
pub use provider::CatalogProvider;
pub use wire::{FakeStoreProduct, PriceConversion};
