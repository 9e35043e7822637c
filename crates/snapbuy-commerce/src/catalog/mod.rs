//! Catalog data contracts.
//!
//! Records here are produced by a catalog provider and consumed read-only
//! by the cart and wishlist.

mod product;

pub use product::{Product, Rating};
