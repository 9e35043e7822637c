//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use snapbuy_commerce::catalog::Product;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::format_rating;

const COLUMNS: [usize; 4] = [5, 44, 12, 18];

/// List products, optionally filtered by category.
pub async fn list(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let products = match args.category.as_deref() {
        Some(category) => ctx
            .catalog
            .products_by_category(category)
            .await
            .with_context(|| format!("Failed to list products in {category}"))?,
        None => ctx
            .catalog
            .all_products()
            .await
            .context("Failed to list products")?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        match args.category {
            Some(category) => ctx.output.info(&format!("No products in {category}")),
            None => ctx.output.info("The catalog is empty"),
        }
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output
        .table_row(&["ID", "TITLE", "PRICE", "CATEGORY"], &COLUMNS);
    for product in &products {
        print_row(product, ctx);
    }
    Ok(())
}

fn print_row(product: &Product, ctx: &Context) {
    let id = product.id.to_string();
    let price = product.price.display();
    ctx.output.table_row(
        &[&id, &product.title, &price, &product.category],
        &COLUMNS,
    );
}

/// Show a single product.
pub async fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let product = ctx
        .catalog
        .product_by_id(args.id)
        .await
        .with_context(|| format!("Failed to fetch product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("category", &product.category);
    ctx.output.kv("rating", &format_rating(&product.rating));
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }
    Ok(())
}

/// List the distinct categories.
pub async fn categories(ctx: &Context) -> Result<()> {
    let categories = ctx
        .catalog
        .categories()
        .await
        .context("Failed to list categories")?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }
    Ok(())
}
