//! Wishlist module.
//!
//! A deduplicated, ordered set of saved products and its observable store.

mod store;
mod wishlist;

pub use store::WishlistStore;
pub use wishlist::{Wishlist, WishlistEvent};
