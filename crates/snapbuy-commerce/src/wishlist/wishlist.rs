//! Wishlist types.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::Serialize;

/// An effective change to a wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WishlistEvent {
    /// A product was saved.
    Added { product_id: ProductId },
    /// A product was removed.
    Removed { product_id: ProductId },
    /// Every product was removed.
    Cleared { removed: usize },
}

/// Saved products, unique by id, in the order they were saved.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product.
    ///
    /// If a product with the same id is already saved this is a no-op; the
    /// stored record is not refreshed.
    pub fn add_to_wishlist(&mut self, product: Product) -> Option<WishlistEvent> {
        if self.is_in_wishlist(product.id) {
            return None;
        }
        let product_id = product.id;
        self.items.push(product);
        Some(WishlistEvent::Added { product_id })
    }

    /// Remove a product. Absent ids are a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> Option<WishlistEvent> {
        let index = self.items.iter().position(|p| p.id == product_id)?;
        self.items.remove(index);
        Some(WishlistEvent::Removed { product_id })
    }

    /// Membership predicate.
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Remove every product. Clearing an empty wishlist is a no-op.
    pub fn clear(&mut self) -> Option<WishlistEvent> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.len();
        self.items.clear();
        Some(WishlistEvent::Cleared { removed })
    }

    /// Get a saved product.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    /// Saved products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
