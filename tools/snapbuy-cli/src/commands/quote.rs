//! Cart quote command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use snapbuy_catalog::CatalogProvider;
use snapbuy_commerce::cart::CartPricing;
use snapbuy_commerce::catalog::Product;
use snapbuy_commerce::storefront::Storefront;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::{format_discount, Output};

const COLUMNS: [usize; 4] = [5, 36, 5, 14];

/// Priced cart plus whatever is left in the wishlist.
#[derive(Debug, Serialize)]
pub struct Quote {
    pub coupon: Option<String>,
    pub pricing: CartPricing,
    pub wishlist: Vec<Product>,
}

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront();
    watch(&storefront, &ctx.output);

    let quote = build_quote(&storefront, ctx.catalog.as_ref(), &args, &ctx.output).await?;

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }
    print_quote(&quote, &ctx.output);
    Ok(())
}

/// Report every store change in verbose mode.
fn watch(storefront: &Storefront, output: &Output) {
    let cart_output = output.clone();
    storefront.cart().write(|cart| {
        cart.subscribe(move |event, cart| {
            cart_output.debug(&format!("cart: {:?} ({} items)", event, cart.total_items()));
        })
    });
    let wishlist_output = output.clone();
    storefront.wishlist().write(|wishlist| {
        wishlist.subscribe(move |event, wishlist| {
            wishlist_output.debug(&format!("wishlist: {:?} ({} saved)", event, wishlist.len()));
        })
    });
}

/// Apply the requested operations to `storefront` and price the result.
pub async fn build_quote(
    storefront: &Storefront,
    catalog: &dyn CatalogProvider,
    args: &QuoteArgs,
    output: &Output,
) -> Result<Quote> {
    for &id in &args.wishlist {
        let product = catalog
            .product_by_id(id)
            .await
            .with_context(|| format!("Failed to fetch product {id}"))?;
        if !storefront.wishlist().write(|w| w.add_to_wishlist(product)) {
            output.warn(&format!("Product {id} is already in the wishlist"));
        }
    }

    for &id in &args.moves {
        let moved = storefront
            .move_to_cart(id)
            .with_context(|| format!("Failed to move product {id} to the cart"))?;
        if !moved {
            output.warn(&format!("Product {id} is not in the wishlist"));
        }
    }

    for line in &args.add {
        let product = catalog
            .product_by_id(line.product_id)
            .await
            .with_context(|| format!("Failed to fetch product {}", line.product_id))?;
        storefront
            .cart()
            .write(|c| c.add_to_cart(product, line.quantity))
            .with_context(|| format!("Failed to add product {} to the cart", line.product_id))?;
    }

    for line in &args.set {
        let changed = storefront
            .cart()
            .write(|c| c.update_quantity(line.product_id, line.quantity))
            .with_context(|| format!("Failed to update product {}", line.product_id))?;
        if !changed {
            output.warn(&format!("Product {} is not in the cart", line.product_id));
        }
    }

    let pricing = storefront
        .price_cart(args.coupon.as_deref())
        .context("Failed to price the cart")?;
    let wishlist = storefront.wishlist().read(|w| w.items().to_vec());

    Ok(Quote {
        coupon: args.coupon.as_ref().map(|c| c.trim().to_uppercase()),
        pricing,
        wishlist,
    })
}

fn print_quote(quote: &Quote, output: &Output) {
    let pricing = &quote.pricing;

    output.header("Cart");
    if pricing.line_items.is_empty() {
        output.info("Your cart is empty");
    } else {
        output.table_row(&["ID", "ITEM", "QTY", "AMOUNT"], &COLUMNS);
        for line in &pricing.line_items {
            let id = line.product_id.to_string();
            let quantity = line.quantity.to_string();
            let amount = line.subtotal.display();
            output.table_row(&[&id, &line.title, &quantity, &amount], &COLUMNS);
        }
    }

    output.header("Price Details");
    output.amount("Subtotal", &pricing.subtotal.display(), false);
    output.amount(
        &format!("GST ({})", pricing.tax_rate),
        &pricing.tax.display(),
        false,
    );
    if let Some(code) = &quote.coupon {
        output.amount(
            &format!("Discount ({code})"),
            &format_discount(pricing.discount),
            false,
        );
    }
    output.amount("Total", &pricing.grand_total.display(), true);

    if !quote.wishlist.is_empty() {
        output.header("Wishlist");
        for product in &quote.wishlist {
            output.list_item(&format!("{} {} {}", product.id, product.title, product.price));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LineSpec;
    use snapbuy_catalog::InMemoryCatalog;
    use snapbuy_commerce::{Currency, Money, ProductId};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new([
            Product::new(ProductId::new(1), "Backpack", Money::new(10000, Currency::INR)),
            Product::new(ProductId::new(2), "Tee", Money::new(5000, Currency::INR)),
        ])
    }

    fn args() -> QuoteArgs {
        QuoteArgs {
            add: Vec::new(),
            set: Vec::new(),
            wishlist: Vec::new(),
            moves: Vec::new(),
            coupon: None,
        }
    }

    fn line(id: u64, quantity: i64) -> LineSpec {
        LineSpec {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_quote_with_coupon() {
        let args = QuoteArgs {
            add: vec![line(1, 2)],
            coupon: Some("spooky15".to_string()),
            ..args()
        };
        let quote = build_quote(
            &Storefront::default(),
            &catalog(),
            &args,
            &Output::new(false, true),
        )
        .await
        .unwrap();

        assert_eq!(quote.coupon.as_deref(), Some("SPOOKY15"));
        assert_eq!(quote.pricing.subtotal.amount_cents, 20000);
        assert_eq!(quote.pricing.tax.amount_cents, 3600);
        assert_eq!(quote.pricing.discount.amount_cents, 3540);
        assert_eq!(quote.pricing.grand_total.amount_cents, 20060);
    }

    #[tokio::test]
    async fn test_wishlist_then_move_then_add() {
        let args = QuoteArgs {
            wishlist: vec![ProductId::new(1), ProductId::new(2)],
            moves: vec![ProductId::new(1)],
            add: vec![line(1, 1)],
            ..args()
        };
        let storefront = Storefront::default();
        let quote = build_quote(&storefront, &catalog(), &args, &Output::new(false, true))
            .await
            .unwrap();

        assert_eq!(quote.pricing.line_items.len(), 1);
        assert_eq!(quote.pricing.line_items[0].quantity, 2);
        assert_eq!(quote.wishlist.len(), 1);
        assert_eq!(quote.wishlist[0].id, ProductId::new(2));
    }

    #[tokio::test]
    async fn test_set_zero_removes_line() {
        let args = QuoteArgs {
            add: vec![line(1, 1), line(2, 3)],
            set: vec![line(2, 0), line(1, 4)],
            ..args()
        };
        let quote = build_quote(
            &Storefront::default(),
            &catalog(),
            &args,
            &Output::new(false, true),
        )
        .await
        .unwrap();

        assert_eq!(quote.pricing.line_items.len(), 1);
        assert_eq!(quote.pricing.line_items[0].quantity, 4);
        assert_eq!(quote.pricing.subtotal.amount_cents, 40000);
    }

    #[tokio::test]
    async fn test_unknown_product_fails() {
        let args = QuoteArgs {
            add: vec![line(99, 1)],
            ..args()
        };
        let result = build_quote(
            &Storefront::default(),
            &catalog(),
            &args,
            &Output::new(false, true),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_quantity_fails() {
        let args = QuoteArgs {
            add: vec![line(1, -1)],
            ..args()
        };
        let storefront = Storefront::default();
        let result =
            build_quote(&storefront, &catalog(), &args, &Output::new(false, true)).await;

        assert!(result.is_err());
        assert!(storefront.cart().read(|c| c.items().is_empty()));
    }

    #[tokio::test]
    async fn test_unknown_coupon_fails() {
        let args = QuoteArgs {
            add: vec![line(1, 1)],
            coupon: Some("NOPE".to_string()),
            ..args()
        };
        let result = build_quote(
            &Storefront::default(),
            &catalog(),
            &args,
            &Output::new(false, true),
        )
        .await;
        assert!(result.is_err());
    }
}
