//! In-memory catalog provider.

use std::path::Path;

use async_trait::async_trait;
use snapbuy_commerce::catalog::Product;
use snapbuy_commerce::ProductId;
use tracing::{debug, warn};

use crate::wire::{parse_products, PriceConversion};
use crate::{CatalogError, CatalogProvider};

/// Catalog backed by a fixed list of products, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Create a catalog from products. Later duplicates of an id are dropped.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            if catalog.products.iter().any(|p| p.id == product.id) {
                warn!(product_id = %product.id, "duplicate catalog id ignored");
                continue;
            }
            catalog.products.push(product);
        }
        catalog
    }

    /// Build from a JSON array in the upstream catalog's shape.
    pub fn from_json(json: &str, conversion: &PriceConversion) -> Result<Self, CatalogError> {
        Ok(Self::new(parse_products(json, conversion)?))
    }

    /// Load a JSON fixture file in the upstream catalog's shape.
    pub async fn load(
        path: impl AsRef<Path>,
        conversion: &PriceConversion,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&json, conversion)?;
        debug!(path = %path.display(), products = catalog.len(), "catalog fixture loaded");
        Ok(catalog)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if product.category.is_empty() || categories.contains(&product.category) {
                continue;
            }
            categories.push(product.category.clone());
        }
        Ok(categories)
    }
}
