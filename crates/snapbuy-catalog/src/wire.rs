//! Wire format of the public demo catalog.
//!
//! Upstream prices are in US dollars; the storefront displays another
//! currency, so every record goes through a [`PriceConversion`] on its way
//! into a [`Product`].

use serde::{Deserialize, Serialize};
use snapbuy_commerce::catalog::{Product, Rating};
use snapbuy_commerce::{Currency, Money, ProductId};

use crate::CatalogError;

/// Rupees per US dollar used by the storefront.
pub const USD_TO_INR_RATE: f64 = 83.0;

/// Rating as sent upstream.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FakeStoreRating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// Product record as sent upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FakeStoreProduct {
    pub id: i64,
    pub title: String,
    /// Price in US dollars.
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: FakeStoreRating,
}

impl FakeStoreProduct {
    /// Convert into a catalog [`Product`], pricing it in the display currency.
    ///
    /// `index` identifies the record in error messages.
    pub fn into_product(
        self,
        index: usize,
        conversion: &PriceConversion,
    ) -> Result<Product, CatalogError> {
        let id = ProductId::try_from(self.id).map_err(|e| CatalogError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;
        let price = conversion
            .convert(self.price)
            .ok_or_else(|| CatalogError::InvalidRecord {
                index,
                reason: format!("unusable price {}", self.price),
            })?;

        Ok(Product::new(id, self.title, price)
            .with_description(self.description)
            .with_category(self.category)
            .with_image(self.image)
            .with_rating(Rating::new(self.rating.rate, self.rating.count)))
    }
}

/// Converts upstream US dollar prices into the display currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceConversion {
    /// Display-currency units per US dollar.
    #[serde(default = "default_rate")]
    pub rate: f64,
    /// Display currency.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Round converted prices to whole major units.
    #[serde(default = "default_whole_units")]
    pub whole_units: bool,
}

fn default_rate() -> f64 {
    USD_TO_INR_RATE
}

fn default_currency() -> Currency {
    Currency::INR
}

fn default_whole_units() -> bool {
    true
}

impl PriceConversion {
    /// Dollars to whole rupees at [`USD_TO_INR_RATE`].
    pub fn usd_to_inr() -> Self {
        Self {
            rate: USD_TO_INR_RATE,
            currency: Currency::INR,
            whole_units: true,
        }
    }

    /// Keep prices as they are, in `currency`.
    pub fn identity(currency: Currency) -> Self {
        Self {
            rate: 1.0,
            currency,
            whole_units: false,
        }
    }

    /// Convert a dollar price. `None` for negative or non-finite input.
    pub fn convert(&self, usd: f64) -> Option<Money> {
        if !usd.is_finite() || usd < 0.0 || !self.rate.is_finite() || self.rate < 0.0 {
            return None;
        }
        let converted = usd * self.rate;
        if self.whole_units {
            let minor = (converted.round() as i64).checked_mul(self.currency.minor_units())?;
            Some(Money::new(minor, self.currency))
        } else {
            Some(Money::from_decimal(converted, self.currency))
        }
    }
}

impl Default for PriceConversion {
    fn default() -> Self {
        Self::usd_to_inr()
    }
}

/// Parse a JSON array of upstream records into products.
pub fn parse_products(json: &str, conversion: &PriceConversion) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<FakeStoreProduct> = serde_json::from_str(json)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_product(index, conversion))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_usd_to_inr_rounds_to_whole_rupees() {
        let conversion = PriceConversion::usd_to_inr();
        // 109.95 * 83 = 9125.85 -> 9126
        assert_eq!(conversion.convert(109.95), Some(Money::new(912_600, Currency::INR)));
        assert_eq!(conversion.convert(0.0), Some(Money::zero(Currency::INR)));
    }

    #[test]
    fn test_identity_keeps_cents() {
        let conversion = PriceConversion::identity(Currency::USD);
        assert_eq!(conversion.convert(22.3), Some(Money::new(2230, Currency::USD)));
    }

    #[test]
    fn test_rejects_unusable_prices() {
        let conversion = PriceConversion::usd_to_inr();
        assert_eq!(conversion.convert(-1.0), None);
        assert_eq!(conversion.convert(f64::NAN), None);
    }

    #[test]
    fn test_record_into_product() {
        let record: FakeStoreProduct = serde_json::from_str(RECORD).unwrap();
        let product = record.into_product(0, &PriceConversion::usd_to_inr()).unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price.display(), "\u{20b9}9126.00");
        assert_eq!(product.rating, Rating::new(3.9, 120));
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let json = r#"[{"id": 1, "title": "ok", "price": 1.0}, {"id": 0, "title": "bad", "price": 1.0}]"#;
        let err = parse_products(json, &PriceConversion::usd_to_inr()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_products("{not json", &PriceConversion::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Deserialization(_)));
    }

    #[test]
    fn test_conversion_config_defaults() {
        let conversion: PriceConversion = serde_json::from_str("{}").unwrap();
        assert_eq!(conversion, PriceConversion::usd_to_inr());
    }
}
