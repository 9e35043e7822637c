//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Rates (tax,
//! coupon percentages) are expressed in basis points for the same reason.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    #[default]
    INR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use snapbuy_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::INR);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "₹236.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "236.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add another Money value, `None` on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Subtract another Money value, `None` on currency mismatch or overflow.
    pub fn checked_sub(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` if any value has a different currency or the sum overflows.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    /// Clamp negative amounts to zero.
    pub fn max_zero(self) -> Money {
        if self.is_negative() {
            Money::zero(self.currency)
        } else {
            self
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// Scale an amount by a basis-point factor, rounding half away from zero.
fn scale_basis_points(amount: Money, basis_points: u32) -> Money {
    let scaled = i128::from(amount.amount_cents) * i128::from(basis_points);
    let half = BASIS_POINTS_PER_UNIT / 2;
    let rounded = if scaled >= 0 {
        (scaled + half) / BASIS_POINTS_PER_UNIT
    } else {
        (scaled - half) / BASIS_POINTS_PER_UNIT
    };
    let clamped = rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
    Money::new(clamped, amount.currency)
}

/// A proportional tax rate in basis points (1800 = 18%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Goods and services tax applied to every cart (18%).
    pub const GST: TaxRate = TaxRate(1800);

    /// No tax.
    pub const ZERO: TaxRate = TaxRate(0);

    /// Create a rate from basis points.
    pub const fn from_basis_points(basis_points: u32) -> Self {
        Self(basis_points)
    }

    /// Rate in basis points.
    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// Rate as a fraction (0.18 for GST).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / BASIS_POINTS_PER_UNIT as f64
    }

    /// Tax owed on `amount`.
    pub fn apply(&self, amount: Money) -> Money {
        scale_basis_points(amount, self.0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::GST
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_basis_points(self.0, f)
    }
}

/// A discount percentage in basis points (1500 = 15% off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Percentage(u32);

impl Percentage {
    /// Largest meaningful discount.
    pub const FULL: Percentage = Percentage(10_000);

    /// Create from basis points, capped at 100%.
    pub fn from_basis_points(basis_points: u32) -> Self {
        Self(basis_points.min(Self::FULL.0))
    }

    /// Create from whole percent (15 = 15%).
    pub fn from_percent(percent: u32) -> Self {
        Self::from_basis_points(percent.saturating_mul(100))
    }

    /// Percentage in basis points.
    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// The share of `amount` this percentage represents.
    pub fn of(&self, amount: Money) -> Money {
        scale_basis_points(amount, self.0)
    }
}

impl From<u32> for Percentage {
    fn from(basis_points: u32) -> Self {
        Self::from_basis_points(basis_points)
    }
}

impl From<Percentage> for u32 {
    fn from(percentage: Percentage) -> u32 {
        percentage.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_basis_points(self.0, f)
    }
}

fn fmt_basis_points(basis_points: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if basis_points % 100 == 0 {
        write!(f, "{}%", basis_points / 100)
    } else {
        write!(f, "{:.2}%", f64::from(basis_points) / 100.0)
    }
}
