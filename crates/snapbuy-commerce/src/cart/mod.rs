//! Shopping cart module.
//!
//! Contains the cart aggregate, its change events, pricing snapshots,
//! coupons and the observable cart store.

mod cart;
mod coupon;
mod event;
mod pricing;
mod store;

pub use cart::{Cart, CartItem, DEFAULT_QUANTITY};
pub use coupon::{Coupon, CouponBook, SPOOKY15};
pub use event::CartEvent;
pub use pricing::{CartPricing, LineItemPricing};
pub use store::CartStore;
