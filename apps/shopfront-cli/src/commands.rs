//! # Command Handlers
//!
//! Each handler takes the loaded configuration, drives `shopfront-core`
//! and returns a serializable report. Printing is left to the caller.

use serde::Serialize;
use shopfront_core::{
    CartTotals, CoreError, Inventory, Order, OrderProcessor, Product, ShoppingCart,
};
use tracing::{debug, info};

use crate::cli::ItemSpec;
use crate::config::ShopConfig;
use crate::error::CliResult;

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: i64,
}

pub fn catalog(config: &ShopConfig) -> CliResult<Vec<CatalogEntry>> {
    let inventory = config.inventory()?;

    Ok(inventory
        .products()
        .into_iter()
        .map(|p| CatalogEntry {
            price: config.store.format_money(p.price),
            stock: p.stock_quantity(),
            id: p.id,
            name: p.name,
            category: p.category,
        })
        .collect())
}

// =============================================================================
// Cart Building
// =============================================================================

/// Fills a cart from `--item` arguments using the inventory's products,
/// then attaches configured promotions and the bulk discount.
pub fn build_cart(
    config: &ShopConfig,
    inventory: &Inventory,
    items: &[ItemSpec],
) -> CliResult<ShoppingCart> {
    let mut cart = ShoppingCart::new();

    for item in items {
        let product = inventory
            .get(&item.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(item.product_id.clone()))?;
        cart.add_item(&product, item.quantity)?;
    }

    for promo in config.promotions() {
        cart.add_promotion(promo);
    }

    if let Some(bulk) = &config.bulk_discount {
        cart.apply_bulk_discount(bulk.threshold, bulk.percent);
    }

    debug!(
        lines = cart.item_count(),
        quantity = cart.total_quantity(),
        promotions = cart.promotions().len(),
        "Cart built"
    );

    Ok(cart)
}

// =============================================================================
// Quote
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: String,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    pub store: String,
    pub lines: Vec<QuoteLine>,
    pub totals: CartTotals,
    pub formatted_total: String,
}

fn quote_report(config: &ShopConfig, cart: &ShoppingCart) -> QuoteReport {
    let store = &config.store;
    let totals = cart.totals();

    QuoteReport {
        store: store.name.clone(),
        lines: cart
            .lines()
            .iter()
            .map(|line| QuoteLine {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: store.format_money(line.product.price),
                line_total: store.format_money(line.line_total()),
            })
            .collect(),
        formatted_total: store.format_money(totals.total),
        totals,
    }
}

pub fn quote(config: &ShopConfig, items: &[ItemSpec]) -> CliResult<QuoteReport> {
    let inventory = config.inventory()?;
    let cart = build_cart(config, &inventory, items)?;
    Ok(quote_report(config, &cart))
}

// =============================================================================
// Checkout
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReport {
    pub quote: QuoteReport,
    pub order: Order,
    pub remaining_stock: Vec<StockLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub product_id: String,
    pub stock: i64,
}

pub fn checkout(config: &ShopConfig, email: &str, items: &[ItemSpec]) -> CliResult<CheckoutReport> {
    let inventory = config.inventory()?;
    let cart = build_cart(config, &inventory, items)?;

    let mut processor = OrderProcessor::new(inventory.clone());
    let order = processor.process_order(&cart, email)?;

    info!(order_id = %order.order_id(), total = %order.total_amount(), "Checkout complete");

    let remaining_stock = order
        .items()
        .iter()
        .filter_map(|line| {
            inventory.get(&line.product_id).map(|p: Product| StockLevel {
                stock: p.stock_quantity(),
                product_id: p.id,
            })
        })
        .collect();

    Ok(CheckoutReport {
        quote: quote_report(config, &cart),
        order,
        remaining_stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use shopfront_core::{Money, ValidationError};

    fn item(id: &str, quantity: i64) -> ItemSpec {
        ItemSpec {
            product_id: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_catalog_sorted_and_formatted() {
        let entries = catalog(&ShopConfig::demo()).unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(entries[0].price, "USD 999.99");
        assert_eq!(entries[0].stock, 10);
    }

    #[test]
    fn test_quote_uses_best_promotion() {
        // 10% of 999.99 beats $50 off
        let report = quote(&ShopConfig::demo(), &[item("p1", 1)]).unwrap();

        assert_eq!(report.totals.subtotal, Money::from_cents(99_999));
        assert_eq!(report.totals.discount, Money::from_cents(10_000));
        assert_eq!(report.totals.total, Money::from_cents(89_999));
        assert_eq!(report.formatted_total, "USD 899.99");
    }

    #[test]
    fn test_quote_applies_bulk_discount() {
        let report = quote(&ShopConfig::demo(), &[item("p4", 10)]).unwrap();

        assert_eq!(report.totals.subtotal, Money::from_cents(5_000));
        assert_eq!(report.totals.discount, Money::from_cents(750));
        assert_eq!(report.totals.total, Money::from_cents(4_250));
    }

    #[test]
    fn test_quote_merges_repeated_items() {
        let report = quote(&ShopConfig::demo(), &[item("p2", 1), item("p2", 2)]).unwrap();

        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.lines[0].quantity, 3);
        assert_eq!(report.lines[0].line_total, "USD 76.50");
    }

    #[test]
    fn test_quote_unknown_product() {
        let err = quote(&ShopConfig::demo(), &[item("nope", 1)]).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::ProductNotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_quote_rejects_non_positive_quantity() {
        let err = quote(&ShopConfig::demo(), &[item("p1", 0)]).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_quote_rejects_overflowing_quantity() {
        // 500 cents × this quantity is just past i64::MAX
        let err = quote(&ShopConfig::demo(), &[item("p4", 18_446_744_073_709_552)]).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Overflow { .. })));
    }

    #[test]
    fn test_checkout_deducts_stock() {
        let report = checkout(&ShopConfig::demo(), "a@b.com", &[item("p3", 4)]).unwrap();

        assert_eq!(report.order.order_id(), "ORD-0001");
        assert_eq!(report.order.customer(), "a@b.com");
        assert_eq!(report.order.total_amount(), report.quote.totals.total);
        assert_eq!(
            report.remaining_stock,
            vec![StockLevel {
                product_id: "p3".to_string(),
                stock: 96
            }]
        );
    }

    #[test]
    fn test_checkout_out_of_stock() {
        let err = checkout(&ShopConfig::demo(), "a@b.com", &[item("p1", 11)]).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::OutOfStock { .. })));
    }

    #[test]
    fn test_checkout_invalid_email() {
        let err = checkout(&ShopConfig::demo(), "nobody", &[item("p1", 1)]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::Validation(ValidationError::InvalidEmail(_)))
        ));
    }

    #[test]
    fn test_checkout_report_serializes() {
        let report = checkout(&ShopConfig::demo(), "a@b.com", &[item("p2", 1)]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["order"]["status"], "confirmed");
        assert_eq!(json["quote"]["store"], "Shopfront Demo Store");
        assert_eq!(json["remaining_stock"][0]["stock"], 49);
    }
}
