//! Observable wishlist store.

use tracing::debug;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::observers::{Observers, SubscriptionId};
use crate::wishlist::{Wishlist, WishlistEvent};

/// Owner of the authoritative wishlist.
#[derive(Debug, Default)]
pub struct WishlistStore {
    wishlist: Wishlist,
    observers: Observers<WishlistEvent, Wishlist>,
}

impl WishlistStore {
    /// Create a store holding an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&WishlistEvent, &Wishlist) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Save a product. Returns `false` if it was already saved.
    pub fn add_to_wishlist(&mut self, product: Product) -> bool {
        let event = self.wishlist.add_to_wishlist(product);
        self.publish(event)
    }

    /// Remove a product. Returns `false` if it was not saved.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> bool {
        let event = self.wishlist.remove_from_wishlist(product_id);
        self.publish(event)
    }

    /// Membership predicate.
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.wishlist.is_in_wishlist(product_id)
    }

    /// Remove every product.
    pub fn clear_wishlist(&mut self) {
        let event = self.wishlist.clear();
        self.publish(event);
    }

    /// Saved products in insertion order.
    pub fn items(&self) -> &[Product] {
        self.wishlist.items()
    }

    /// Read-only view of the wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    fn publish(&self, event: Option<WishlistEvent>) -> bool {
        let Some(event) = event else {
            return false;
        };
        debug!(?event, saved = self.wishlist.len(), "wishlist changed");
        self.observers.notify(&event, &self.wishlist);
        true
    }
}
