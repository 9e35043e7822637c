//! Observable cart store.

use tracing::{debug, warn};

use crate::cart::{Cart, CartEvent, CartItem, CartPricing, DEFAULT_QUANTITY};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::observers::{Observers, SubscriptionId};
use crate::settings::StoreSettings;

/// Owner of the authoritative cart.
///
/// Screens call the operations below and re-render from the cart view
/// passed to their listener. Each effective change notifies every listener
/// exactly once; no-ops and rejected input notify nobody.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: Cart,
    observers: Observers<CartEvent, Cart>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new(settings: &StoreSettings) -> Self {
        Self::from_cart(Cart::new(settings.currency, settings.tax_rate))
    }

    /// Create a store around an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self {
            cart,
            observers: Observers::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent, &Cart) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Add `quantity` units of a product, merging with an existing line.
    pub fn add_to_cart(&mut self, product: Product, quantity: i64) -> Result<(), CommerceError> {
        let product_id = product.id;
        match self.cart.add_to_cart(product, quantity) {
            Ok(event) => {
                self.publish(event);
                Ok(())
            }
            Err(error) => {
                warn!(product_id = %product_id, quantity, %error, "add_to_cart rejected");
                Err(error)
            }
        }
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: Product) -> Result<(), CommerceError> {
        self.add_to_cart(product, DEFAULT_QUANTITY)
    }

    /// Remove a product's line. Returns `false` if it was not in the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        match self.cart.remove_from_cart(product_id) {
            Some(event) => {
                self.publish(event);
                true
            }
            None => false,
        }
    }

    /// Set a line's quantity; zero or less removes it, absent ids are ignored.
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        match self.cart.update_quantity(product_id, quantity) {
            Ok(Some(event)) => {
                self.publish(event);
                Ok(true)
            }
            Ok(None) => {
                debug!(product_id = %product_id, quantity, "update_quantity left cart unchanged");
                Ok(false)
            }
            Err(error) => {
                warn!(product_id = %product_id, quantity, %error, "update_quantity rejected");
                Err(error)
            }
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        if let Some(event) = self.cart.clear() {
            self.publish(event);
        }
    }

    /// Quantity of a product, or 0.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.cart.item_quantity(product_id)
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Σ(price × quantity).
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Tax on the subtotal.
    pub fn gst(&self) -> Money {
        self.cart.gst()
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Pricing snapshot.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn publish(&self, event: CartEvent) {
        debug!(?event, total_items = self.cart.total_items(), "cart changed");
        self.observers.notify(&event, &self.cart);
    }
}
