//! Cart pricing calculations.

use crate::cart::Coupon;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Money, TaxRate};
use serde::Serialize;

/// Complete pricing breakdown for a cart.
///
/// A read snapshot: it is computed from the cart on demand and never
/// written back. Discounts live here, not in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Σ(price × quantity).
    pub subtotal: Money,
    /// Rate used for `tax`.
    pub tax_rate: TaxRate,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Discount applied by the caller.
    pub discount: Money,
    /// Final total (subtotal + tax - discount), never negative.
    pub grand_total: Money,
    /// Per-line pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Subtotal plus tax, before the discount.
    pub fn total_before_discount(&self) -> Money {
        Money::new(
            self.subtotal
                .amount_cents
                .saturating_add(self.tax.amount_cents),
            self.subtotal.currency,
        )
    }

    /// Apply a coupon to the post-tax total.
    ///
    /// Replaces any discount already present.
    pub fn apply_coupon(self, coupon: &Coupon) -> CartPricing {
        let discount = coupon.discount_for(self.total_before_discount());
        self.with_clamped_discount(discount)
    }

    /// Apply a discount amount computed elsewhere.
    ///
    /// The discount is capped so the grand total never drops below zero.
    pub fn with_discount(self, discount: Money) -> Result<CartPricing, CommerceError> {
        if discount.currency != self.subtotal.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.subtotal.currency.code().to_string(),
                got: discount.currency.code().to_string(),
            });
        }
        if discount.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "discount must not be negative: {}",
                discount.display()
            )));
        }
        Ok(self.with_clamped_discount(discount))
    }

    fn with_clamped_discount(mut self, discount: Money) -> CartPricing {
        let before = self.total_before_discount();
        let discount = if discount.amount_cents > before.amount_cents {
            before.max_zero()
        } else {
            discount
        };
        self.discount = discount;
        self.grand_total = Money::new(before.amount_cents - discount.amount_cents, before.currency)
            .max_zero();
        self
    }

    /// Check if any discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Discount as a percentage of the pre-discount total.
    pub fn discount_percentage(&self) -> f64 {
        let before = self.total_before_discount();
        if before.amount_cents == 0 {
            return 0.0;
        }
        (self.discount.amount_cents as f64 / before.amount_cents as f64) * 100.0
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Product title, for rendering.
    pub title: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price × quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Percentage};

    fn pricing(subtotal: i64) -> CartPricing {
        let subtotal = Money::new(subtotal, Currency::INR);
        let tax = TaxRate::GST.apply(subtotal);
        CartPricing {
            subtotal,
            tax_rate: TaxRate::GST,
            tax,
            discount: Money::zero(Currency::INR),
            grand_total: Money::new(subtotal.amount_cents + tax.amount_cents, Currency::INR),
            line_items: vec![],
        }
    }

    #[test]
    fn test_coupon_applies_to_post_tax_total() {
        let coupon = Coupon::new("SPOOKY15", Percentage::from_percent(15));
        let priced = pricing(20000).apply_coupon(&coupon);

        assert_eq!(priced.discount.amount_cents, 3540);
        assert_eq!(priced.grand_total.amount_cents, 20060);
        assert!(priced.has_discount());
        assert!((priced.discount_percentage() - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_discount_capped_at_total() {
        let priced = pricing(1000)
            .with_discount(Money::new(5000, Currency::INR))
            .unwrap();
        assert_eq!(priced.discount.amount_cents, 1180);
        assert!(priced.grand_total.is_zero());
    }

    #[test]
    fn test_discount_validation() {
        assert!(matches!(
            pricing(1000).with_discount(Money::new(-1, Currency::INR)),
            Err(CommerceError::ValidationError(_))
        ));
        assert!(matches!(
            pricing(1000).with_discount(Money::new(100, Currency::USD)),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_no_discount_on_empty_cart() {
        let priced = pricing(0).apply_coupon(&Coupon::new("X", Percentage::from_percent(50)));
        assert!(!priced.has_discount());
        assert_eq!(priced.discount_percentage(), 0.0);
    }
}
