//! Cart and cart item types.

use crate::cart::{CartEvent, CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money, TaxRate};
use serde::Serialize;

/// Quantity used when the caller does not specify one.
pub const DEFAULT_QUANTITY: i64 = 1;

/// A line item: one distinct product and its desired quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Product identifier of this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        let price = self.product.price;
        Money::new(
            price.amount_cents.saturating_mul(i64::from(self.quantity)),
            price.currency,
        )
    }
}

/// A shopping cart.
///
/// Holds at most one [`CartItem`] per product id, in insertion order.
/// Subtotal, tax and total are derived from the items on every call.
/// Mutating methods return the [`CartEvent`] describing the change, or
/// `None` when the call left the cart untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
    tax_rate: TaxRate,
}

impl Cart {
    /// Create an empty cart priced in `currency` and taxed at `tax_rate`.
    pub fn new(currency: Currency, tax_rate: TaxRate) -> Self {
        Self {
            items: Vec::new(),
            currency,
            tax_rate,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the same product id has its quantity increased;
    /// otherwise a new line is appended.
    ///
    /// Returns an error, leaving the cart unchanged, if:
    /// - The product id is zero or the price is negative
    /// - Quantity is not positive
    /// - The product is priced in a different currency than the cart
    /// - The merged quantity or the cart subtotal would overflow
    pub fn add_to_cart(
        &mut self,
        product: Product,
        quantity: i64,
    ) -> Result<CartEvent, CommerceError> {
        if product.id.get() == 0 {
            return Err(CommerceError::InvalidProductId(product.id.to_string()));
        }
        if product.price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "price of product {} is negative: {}",
                product.id,
                product.price.display()
            )));
        }
        let quantity = positive_quantity(quantity)?;

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let product_id = product.id;
        let position = self.position(product_id);
        let merged = match position {
            Some(index) => self.items[index]
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?,
            None => quantity,
        };
        self.check_subtotal(product_id, product.price, merged)?;

        match position {
            Some(index) => {
                let item = &mut self.items[index];
                let from = item.quantity;
                item.quantity = merged;
                Ok(CartEvent::QuantityUpdated {
                    product_id,
                    from,
                    to: merged,
                })
            }
            None => {
                self.items.push(CartItem { product, quantity });
                Ok(CartEvent::ItemAdded {
                    product_id,
                    quantity,
                })
            }
        }
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: Product) -> Result<CartEvent, CommerceError> {
        self.add_to_cart(product, DEFAULT_QUANTITY)
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let index = self.position(product_id)?;
        let item = self.items.remove(index);
        Some(CartEvent::ItemRemoved {
            product_id,
            quantity: item.quantity,
        })
    }

    /// Set the quantity of an existing line exactly.
    ///
    /// A quantity of zero or less removes the line. An absent product id is
    /// a no-op: this never creates a line. Setting the current quantity
    /// again is also a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Option<CartEvent>, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_from_cart(product_id));
        }

        let Some(index) = self.position(product_id) else {
            return Ok(None);
        };
        let quantity = positive_quantity(quantity)?;
        let from = self.items[index].quantity;
        if from == quantity {
            return Ok(None);
        }

        let price = self.items[index].product.price;
        self.check_subtotal(product_id, price, quantity)?;
        self.items[index].quantity = quantity;
        Ok(Some(CartEvent::QuantityUpdated {
            product_id,
            from,
            to: quantity,
        }))
    }

    /// Remove every line. Clearing an empty cart is a no-op.
    pub fn clear(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        let removed_lines = self.items.len();
        self.items.clear();
        Some(CartEvent::CartCleared { removed_lines })
    }

    /// Quantity of a product, or 0 if it is not in the cart.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.get_item(product_id).map_or(0, |item| item.quantity)
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    /// Currency every line is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Tax rate applied to the subtotal.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Σ(price × quantity).
    pub fn subtotal(&self) -> Money {
        // Every mutation checks the subtotal for overflow before committing.
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, item| {
                acc.checked_add(&item.line_total())
            })
            .unwrap_or(Money::new(i64::MAX, self.currency))
    }

    /// Tax on the subtotal.
    pub fn gst(&self) -> Money {
        self.tax_rate.apply(self.subtotal())
    }

    /// Subtotal plus tax, before any discount.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        let tax = self.tax_rate.apply(subtotal);
        Money::new(
            subtotal.amount_cents.saturating_add(tax.amount_cents),
            self.currency,
        )
    }

    /// Full pricing breakdown with no discount applied.
    pub fn pricing(&self) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product.id,
                title: item.product.title.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                subtotal: item.line_total(),
            })
            .collect();

        let subtotal = self.subtotal();
        let tax = self.gst();
        CartPricing {
            subtotal,
            tax_rate: self.tax_rate,
            tax,
            discount: Money::zero(self.currency),
            grand_total: self.total(),
            line_items,
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }

    /// Verify the subtotal stays representable once `product_id` has `quantity` units.
    fn check_subtotal(
        &self,
        product_id: ProductId,
        price: Money,
        quantity: u32,
    ) -> Result<(), CommerceError> {
        let line = price
            .checked_mul(i64::from(quantity))
            .ok_or(CommerceError::Overflow)?;
        let subtotal = self
            .items
            .iter()
            .filter(|item| item.product.id != product_id)
            .try_fold(line, |acc, item| acc.checked_add(&item.line_total()))
            .ok_or(CommerceError::Overflow)?;
        // Tax on top of the subtotal must fit as well.
        subtotal
            .checked_add(&self.tax_rate.apply(subtotal))
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default(), TaxRate::default())
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CommerceError> {
    if quantity <= 0 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    u32::try_from(quantity).map_err(|_| CommerceError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(price_cents, Currency::INR),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.currency(), Currency::INR);
        assert_eq!(cart.tax_rate(), TaxRate::GST);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let event = cart.add_to_cart(product(1, 1000), 2).unwrap();

        assert_eq!(
            event,
            CartEvent::ItemAdded {
                product_id: ProductId::new(1),
                quantity: 2
            }
        );
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 1000)).unwrap();
        let event = cart.add_to_cart(product(1, 1000), 2).unwrap();

        assert_eq!(
            event,
            CartEvent::QuantityUpdated {
                product_id: ProductId::new(1),
                from: 1,
                to: 3
            }
        );
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_quantity(ProductId::new(1)), 3);
    }

    #[test]
    fn test_merge_keeps_position() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 100)).unwrap();
        cart.add_one(product(2, 100)).unwrap();
        cart.add_one(product(1, 100)).unwrap();

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.add_to_cart(product(1, 1000), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_to_cart(product(1, 1000), -3),
            Err(CommerceError::InvalidQuantity(-3))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::default();
        let usd = Product::new(ProductId::new(9), "Import", Money::new(500, Currency::USD));
        assert!(matches!(
            cart.add_one(usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_product_id_rejected() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.add_to_cart(product(0, 1000), 1),
            Err(CommerceError::InvalidProductId("0".to_string()))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 1000)).unwrap();
        assert!(matches!(
            cart.add_to_cart(product(2, -10000), 2),
            Err(CommerceError::ValidationError(_))
        ));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.subtotal().amount_cents, 1000);
        assert_eq!(cart.total().amount_cents, 1180);
    }

    #[test]
    fn test_deserialized_product_with_zero_id_never_reaches_cart() {
        let json = r#"{"id":0,"title":"Ghost","price":{"amount_cents":10000,"currency":"INR"}}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_overflow_rejected_without_mutation() {
        let mut cart = Cart::default();
        cart.add_one(product(1, i64::MAX / 4)).unwrap();
        assert_eq!(
            cart.add_to_cart(product(1, i64::MAX / 4), 10),
            Err(CommerceError::Overflow)
        );
        assert_eq!(cart.item_quantity(ProductId::new(1)), 1);
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::default();
        cart.add_to_cart(product(1, 1000), 4).unwrap();

        let event = cart.update_quantity(ProductId::new(1), 2).unwrap();
        assert_eq!(
            event,
            Some(CartEvent::QuantityUpdated {
                product_id: ProductId::new(1),
                from: 4,
                to: 2
            })
        );
        assert_eq!(cart.item_quantity(ProductId::new(1)), 2);
    }

    #[test]
    fn test_update_quantity_same_value_is_noop() {
        let mut cart = Cart::default();
        cart.add_to_cart(product(1, 1000), 2).unwrap();
        assert_eq!(cart.update_quantity(ProductId::new(1), 2), Ok(None));
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::default();
        assert_eq!(cart.update_quantity(ProductId::new(5), 3), Ok(None));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 1000)).unwrap();
        let event = cart.update_quantity(ProductId::new(1), -1).unwrap();
        assert_eq!(
            event,
            Some(CartEvent::ItemRemoved {
                product_id: ProductId::new(1),
                quantity: 1
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 1000)).unwrap();

        assert!(cart.remove_from_cart(ProductId::new(1)).is_some());
        assert!(cart.remove_from_cart(ProductId::new(1)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_one(product(1, 1000)).unwrap();
        cart.add_one(product(2, 1000)).unwrap();

        assert_eq!(cart.clear(), Some(CartEvent::CartCleared { removed_lines: 2 }));
        assert_eq!(cart.clear(), None);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::default();
        cart.add_to_cart(product(1, 10000), 2).unwrap();

        assert_eq!(cart.subtotal().amount_cents, 20000);
        assert_eq!(cart.gst().amount_cents, 3600);
        assert_eq!(cart.total().amount_cents, 23600);

        let pricing = cart.pricing();
        assert_eq!(pricing.line_items.len(), 1);
        assert_eq!(pricing.line_items[0].subtotal.amount_cents, 20000);
        assert_eq!(pricing.grand_total.amount_cents, 23600);
        assert!(pricing.discount.is_zero());
    }

    #[test]
    fn test_totals_follow_mutations() {
        let mut cart = Cart::default();
        cart.add_to_cart(product(1, 500), 2).unwrap();
        assert_eq!(cart.subtotal().amount_cents, 1000);

        cart.add_to_cart(product(2, 250), 3).unwrap();
        assert_eq!(cart.subtotal().amount_cents, 1750);
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity(ProductId::new(1), 1).unwrap();
        assert_eq!(cart.subtotal().amount_cents, 1250);
    }
}
