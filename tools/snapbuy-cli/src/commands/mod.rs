//! CLI command implementations.

pub mod products;
pub mod quote;

use std::str::FromStr;

use clap::Args;
use snapbuy_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list products in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the quote command.
///
/// Operations run in the order: wishlist, move, add, set.
#[derive(Args)]
pub struct QuoteArgs {
    /// Add a product to the cart, as `ID` or `ID:QTY`.
    #[arg(short, long, value_name = "ID[:QTY]")]
    pub add: Vec<LineSpec>,

    /// Set a cart line's quantity, as `ID:QTY` (0 removes it).
    #[arg(short, long, value_name = "ID:QTY")]
    pub set: Vec<LineSpec>,

    /// Save a product to the wishlist.
    #[arg(short, long, value_name = "ID")]
    pub wishlist: Vec<ProductId>,

    /// Move a saved product from the wishlist into the cart.
    #[arg(short = 'm', long = "move", value_name = "ID")]
    pub moves: Vec<ProductId>,

    /// Coupon code to redeem.
    #[arg(long)]
    pub coupon: Option<String>,
}

/// A product id with an optional quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl FromStr for LineSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => {
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| format!("invalid quantity: {quantity}"))?;
                (id, quantity)
            }
            None => (s, 1),
        };
        let product_id = ProductId::parse(id).map_err(|e| e.to_string())?;
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spec_defaults_to_one() {
        let line: LineSpec = "9".parse().unwrap();
        assert_eq!(line.product_id, ProductId::new(9));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_line_spec_with_quantity() {
        let line: LineSpec = "1:3".parse().unwrap();
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.quantity, 3);

        // Range checks on the quantity belong to the cart.
        let line: LineSpec = "1:0".parse().unwrap();
        assert_eq!(line.quantity, 0);
    }

    #[test]
    fn test_line_spec_rejects_garbage() {
        assert!("x:1".parse::<LineSpec>().is_err());
        assert!("1:x".parse::<LineSpec>().is_err());
        assert!("-4".parse::<LineSpec>().is_err());
    }
}
