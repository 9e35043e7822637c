//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart, wishlist and pricing operations.
///
/// Absent products are not errors: removing or updating an id that is not
/// in a store is a no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product identifier is zero, negative or not a number.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Quantity is not a positive integer.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Coupon code is not known to the coupon book.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
