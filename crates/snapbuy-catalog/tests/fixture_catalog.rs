//! Browsing the bundled fixture and shopping from it.

use std::path::PathBuf;

use snapbuy_catalog::{CatalogError, CatalogProvider, InMemoryCatalog, PriceConversion};
use snapbuy_commerce::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/products.json")
}

async fn fixture() -> InMemoryCatalog {
    InMemoryCatalog::load(fixture_path(), &PriceConversion::usd_to_inr())
        .await
        .unwrap()
}

#[tokio::test]
async fn fixture_prices_are_in_whole_rupees() {
    let catalog = fixture().await;
    assert_eq!(catalog.len(), 6);

    for product in catalog.all_products().await.unwrap() {
        assert_eq!(product.price.currency, Currency::INR);
        assert_eq!(product.price.amount_cents % 100, 0, "{}", product.title);
    }

    let backpack = catalog.product_by_id(ProductId::new(1)).await.unwrap();
    assert_eq!(backpack.price, Money::new(912_600, Currency::INR));
}

#[tokio::test]
async fn fixture_categories() {
    let catalog = fixture().await;
    assert_eq!(
        catalog.categories().await.unwrap(),
        vec![
            "men's clothing".to_string(),
            "jewelery".to_string(),
            "electronics".to_string(),
            "women's clothing".to_string(),
        ]
    );
    assert_eq!(catalog.products_by_category("electronics").await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let catalog = fixture().await;
    assert!(matches!(
        catalog.product_by_id(ProductId::new(404)).await,
        Err(CatalogError::NotFound(_))
    ));
}

#[tokio::test]
async fn browse_wishlist_and_check_out() {
    let catalog = fixture().await;
    let storefront = Storefront::default();

    // WD drive: $64 -> 5312 rupees.
    let drive = catalog.product_by_id(ProductId::new(9)).await.unwrap();
    // SSD: $109 -> 9047 rupees.
    let ssd = catalog.product_by_id(ProductId::new(10)).await.unwrap();

    storefront.cart().write(|c| c.add_to_cart(drive, 2)).unwrap();
    storefront.wishlist().write(|w| w.add_to_wishlist(ssd));
    assert!(storefront.move_to_cart(ProductId::new(10)).unwrap());

    let pricing = storefront.price_cart(None).unwrap();
    assert_eq!(pricing.subtotal, Money::new(1_967_100, Currency::INR));
    assert_eq!(pricing.tax, Money::new(354_078, Currency::INR));
    assert_eq!(pricing.grand_total, Money::new(2_321_178, Currency::INR));
    assert!(storefront.wishlist().read(|w| w.items().is_empty()));
}

/// Upstream that is down.
struct UnavailableCatalog;

#[async_trait::async_trait]
impl CatalogProvider for UnavailableCatalog {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Http {
            status: 503,
            url: "https://fakestoreapi.com/products".to_string(),
        })
    }

    async fn product_by_id(&self, _id: ProductId) -> Result<Product, CatalogError> {
        Err(CatalogError::Connection("connection refused".to_string()))
    }

    async fn products_by_category(&self, _category: &str) -> Result<Vec<Product>, CatalogError> {
        self.all_products().await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.all_products().await.map(|_| Vec::new())
    }
}

#[tokio::test]
async fn upstream_failures_reach_the_caller_unchanged() {
    let catalog: Box<dyn CatalogProvider> = Box::new(UnavailableCatalog);
    let storefront = Storefront::default();

    let err = catalog.product_by_id(ProductId::new(1)).await.unwrap_err();
    assert!(err.is_transient());
    assert!(matches!(
        catalog.products_by_category("electronics").await,
        Err(CatalogError::Http { status: 503, .. })
    ));

    // Nothing was fetched, so nothing reached the cart.
    assert!(storefront.cart().read(|c| c.items().is_empty()));
}
