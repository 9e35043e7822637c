//! Catalog provider contract.

use async_trait::async_trait;
use snapbuy_commerce::catalog::Product;
use snapbuy_commerce::ProductId;

use crate::CatalogError;

/// Source of product records.
///
/// Every lookup may fail; implementations return the failure as-is and do
/// not retry or cache.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Every product in the catalog.
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// A single product.
    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Products in a category. Unknown categories yield an empty list.
    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// Distinct category names.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;
}
