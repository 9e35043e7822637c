//! Coupon codes.
//!
//! A coupon turns into a discount amount on a [`CartPricing`](crate::cart::CartPricing)
//! snapshot. The cart itself never stores coupons.

use crate::error::CommerceError;
use crate::money::{Money, Percentage};
use serde::{Deserialize, Serialize};

/// Code of the seasonal coupon shipped with the storefront.
pub const SPOOKY15: &str = "SPOOKY15";

/// A percentage-off coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Code the customer types (matched case-insensitively).
    pub code: String,
    /// Share of the post-tax total taken off.
    pub percent_off: Percentage,
    /// Description shown next to the discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Coupon {
    /// Create a new coupon.
    pub fn new(code: impl Into<String>, percent_off: Percentage) -> Self {
        Self {
            code: code.into(),
            percent_off,
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether `code` redeems this coupon.
    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Discount granted on `total`.
    pub fn discount_for(&self, total: Money) -> Money {
        self.percent_off.of(total).max_zero()
    }
}

/// Registry of redeemable coupons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    /// Create an empty coupon book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coupon book with the storefront's built-in coupons.
    pub fn with_defaults() -> Self {
        let mut book = Self::new();
        book.insert(
            Coupon::new(SPOOKY15, Percentage::from_percent(15)).with_description("15% off"),
        );
        book
    }

    /// Add a coupon, replacing any coupon with the same code.
    pub fn insert(&mut self, coupon: Coupon) {
        self.coupons.retain(|c| !c.matches(&coupon.code));
        self.coupons.push(coupon);
    }

    /// Remove a coupon by code.
    pub fn remove(&mut self, code: &str) -> bool {
        let len_before = self.coupons.len();
        self.coupons.retain(|c| !c.matches(code));
        self.coupons.len() < len_before
    }

    /// Look up the coupon a customer entered.
    pub fn redeem(&self, code: &str) -> Result<&Coupon, CommerceError> {
        self.coupons
            .iter()
            .find(|c| c.matches(code))
            .ok_or_else(|| CommerceError::InvalidCouponCode(code.trim().to_string()))
    }

    /// Iterate over the coupons.
    pub fn iter(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.iter()
    }

    /// Number of coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Check if there are no coupons.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl FromIterator<Coupon> for CouponBook {
    fn from_iter<I: IntoIterator<Item = Coupon>>(iter: I) -> Self {
        let mut book = Self::new();
        for coupon in iter {
            book.insert(coupon);
        }
        book
    }
}
