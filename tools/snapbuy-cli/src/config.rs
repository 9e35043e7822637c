//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use snapbuy_catalog::PriceConversion;
use snapbuy_commerce::cart::{Coupon, CouponBook};
use snapbuy_commerce::settings::StoreSettings;
use snapbuy_commerce::Percentage;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapbuyConfig {
    /// Store-wide currency and tax settings.
    #[serde(default)]
    pub store: StoreSettings,

    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Coupons redeemable on top of the built-in ones.
    #[serde(default)]
    pub coupons: Vec<CouponConfig>,
}

impl SnapbuyConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the storefront cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.conversion.currency != self.store.currency {
            bail!(
                "catalog prices convert to {} but the store sells in {}",
                self.catalog.conversion.currency,
                self.store.currency
            );
        }
        for coupon in &self.coupons {
            if coupon.code.trim().is_empty() {
                bail!("coupon code must not be empty");
            }
            if coupon.percent_off == 0 || coupon.percent_off > 100 {
                bail!(
                    "coupon {} must take off between 1 and 100 percent, got {}",
                    coupon.code,
                    coupon.percent_off
                );
            }
        }
        Ok(())
    }

    /// Built-in coupons plus the configured ones. Configured coupons
    /// replace built-in coupons with the same code.
    pub fn coupon_book(&self) -> CouponBook {
        let mut book = CouponBook::with_defaults();
        for coupon in &self.coupons {
            book.insert(coupon.to_coupon());
        }
        book
    }
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture in the upstream catalog's shape.
    #[serde(default = "default_fixture")]
    pub fixture: PathBuf,

    /// How upstream dollar prices map to the display currency.
    #[serde(default)]
    pub conversion: PriceConversion,
}

fn default_fixture() -> PathBuf {
    PathBuf::from("fixtures").join("products.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixture: default_fixture(),
            conversion: PriceConversion::default(),
        }
    }
}

/// A coupon as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponConfig {
    /// Code the customer types.
    pub code: String,

    /// Whole percent off the post-tax total.
    pub percent_off: u32,

    /// Shown next to the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CouponConfig {
    fn to_coupon(&self) -> Coupon {
        let coupon = Coupon::new(self.code.trim(), Percentage::from_percent(self.percent_off));
        match &self.description {
            Some(description) => coupon.with_description(description.clone()),
            None => coupon,
        }
    }
}
