//! Application-scoped storefront context.
//!
//! Owns one cart store and one wishlist store for the lifetime of a
//! session and is handed to every screen that needs them. The two stores
//! never reference each other; cross-store operations live here.

use tracing::debug;

use crate::cart::{CartPricing, CartStore, CouponBook};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::settings::StoreSettings;
use crate::shared::SharedStore;
use crate::wishlist::WishlistStore;

/// Move a saved product into the cart with quantity 1.
///
/// The cart addition runs first, so a rejected addition leaves both stores
/// untouched. Returns `false` when the product is not in the wishlist.
pub fn wishlist_to_cart(
    wishlist: &mut WishlistStore,
    cart: &mut CartStore,
    product_id: ProductId,
) -> Result<bool, CommerceError> {
    let Some(product) = wishlist.wishlist().get(product_id).cloned() else {
        return Ok(false);
    };
    cart.add_one(product)?;
    wishlist.remove_from_wishlist(product_id);
    debug!(product_id = %product_id, "moved from wishlist to cart");
    Ok(true)
}

/// Session context holding the cart and wishlist.
#[derive(Debug, Clone)]
pub struct Storefront {
    settings: StoreSettings,
    cart: SharedStore<CartStore>,
    wishlist: SharedStore<WishlistStore>,
    coupons: CouponBook,
}

impl Storefront {
    /// Start a session with empty stores and the built-in coupons.
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            cart: SharedStore::new(CartStore::new(&settings)),
            wishlist: SharedStore::default(),
            coupons: CouponBook::with_defaults(),
        }
    }

    /// Replace the coupon book.
    pub fn with_coupons(mut self, coupons: CouponBook) -> Self {
        self.coupons = coupons;
        self
    }

    /// Store settings.
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Cart store handle.
    pub fn cart(&self) -> &SharedStore<CartStore> {
        &self.cart
    }

    /// Wishlist store handle.
    pub fn wishlist(&self) -> &SharedStore<WishlistStore> {
        &self.wishlist
    }

    /// Redeemable coupons.
    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    /// Move a saved product into the cart.
    ///
    /// Locks the wishlist before the cart; every cross-store operation uses
    /// this order.
    pub fn move_to_cart(&self, product_id: ProductId) -> Result<bool, CommerceError> {
        self.wishlist.write(|wishlist| {
            self.cart
                .write(|cart| wishlist_to_cart(wishlist, cart, product_id))
        })
    }

    /// Price the cart, optionally redeeming a coupon code.
    pub fn price_cart(&self, coupon_code: Option<&str>) -> Result<CartPricing, CommerceError> {
        let pricing = self.cart.read(CartStore::pricing);
        match coupon_code {
            Some(code) => {
                let coupon = self.coupons.redeem(code)?;
                Ok(pricing.apply_coupon(coupon))
            }
            None => Ok(pricing),
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StoreSettings::default())
    }
}
