//! Store-wide pricing settings.

use crate::money::{Currency, TaxRate};
use serde::{Deserialize, Serialize};

/// Settings shared by every cart created in a storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Display currency every product price is expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Tax applied to the cart subtotal, in basis points.
    #[serde(default, rename = "tax_rate_bps")]
    pub tax_rate: TaxRate,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            currency: Currency::INR,
            tax_rate: TaxRate::GST,
        }
    }
}
