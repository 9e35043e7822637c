//! Cart, wishlist and pricing core for the SnapBuy storefront.
//!
//! This crate provides the in-process state behind the storefront screens:
//!
//! - **Catalog**: the read-only `Product` record supplied by a catalog provider
//! - **Cart**: line items with merge-on-add, quantity updates, GST pricing, coupons
//! - **Wishlist**: a deduplicated, ordered set of saved products
//! - **Storefront**: the session context that owns both stores
//!
//! # Example
//!
//! ```rust
//! use snapbuy_commerce::prelude::*;
//!
//! let storefront = Storefront::default();
//! let mug = Product::new(ProductId::new(1), "Mug", Money::new(10000, Currency::INR));
//!
//! storefront.cart().write(|cart| cart.add_to_cart(mug, 2))?;
//!
//! let pricing = storefront.price_cart(None)?;
//! assert_eq!(pricing.subtotal.display(), "\u{20b9}200.00");
//! assert_eq!(pricing.tax.display(), "\u{20b9}36.00");
//! assert_eq!(pricing.grand_total.display(), "\u{20b9}236.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod observers;
pub mod settings;
pub mod shared;

pub mod cart;
pub mod catalog;
pub mod storefront;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money, Percentage, TaxRate};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money, Percentage, TaxRate};
    pub use crate::observers::SubscriptionId;
    pub use crate::settings::StoreSettings;
    pub use crate::shared::SharedStore;

    // Catalog
    pub use crate::catalog::{Product, Rating};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartItem, CartPricing, CartStore, Coupon, CouponBook, LineItemPricing,
    };

    // Wishlist
    pub use crate::wishlist::{Wishlist, WishlistEvent, WishlistStore};

    // Storefront
    pub use crate::storefront::{wishlist_to_cart, Storefront};
}
