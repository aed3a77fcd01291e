//! # Order Processing
//!
//! Turns a cart into a confirmed order.
//!
//! ## Checkout State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_order(cart, email)                           │
//! │                                                                         │
//! │  1. cart empty? ─────────────yes──► ValidationError::EmptyCart         │
//! │         │                                                               │
//! │  2. email rule fails? ───────yes──► ValidationError::InvalidEmail      │
//! │         │                                                               │
//! │  3. Inventory::reserve(lines)                                          │
//! │     ├── any line short? ─────yes──► CoreError::OutOfStock             │
//! │     └── deduct every line          (steps 3-4 under one lock)          │
//! │         │                                                               │
//! │  5. Order { ORD-0001, now, email, lines, cart total, confirmed }       │
//! │         │                                                               │
//! │  6. append to order log, return a copy                                 │
//! │                                                                         │
//! │  Any failure leaves stock and the order log untouched.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cart::ShoppingCart;
use crate::error::{CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::types::{Order, OrderLine};
use crate::validation::validate_checkout_email;

/// Validates carts, deducts stock and keeps the log of confirmed orders.
#[derive(Debug)]
pub struct OrderProcessor {
    inventory: Inventory,
    orders: Vec<Order>,
}

impl OrderProcessor {
    /// Creates a processor that deducts stock from `inventory`.
    pub fn new(inventory: Inventory) -> Self {
        OrderProcessor {
            inventory,
            orders: Vec::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Confirmed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Validates `cart`, deducts its quantities from stock and records an
    /// order for `customer_email`.
    ///
    /// ```rust
    /// use shopfront_core::{Inventory, Money, OrderProcessor, Product, ShoppingCart};
    ///
    /// let widget = Product::new("p1", "Widget", Money::from_cents(1000), "tools", 5).unwrap();
    /// let inventory = Inventory::from_products([widget.clone()]);
    /// let mut processor = OrderProcessor::new(inventory.clone());
    ///
    /// let mut cart = ShoppingCart::new();
    /// cart.add_item(&widget, 2).unwrap();
    ///
    /// let order = processor.process_order(&cart, "a@b.com").unwrap();
    /// assert_eq!(order.order_id(), "ORD-0001");
    /// assert_eq!(inventory.stock_of("p1"), Some(3));
    /// ```
    pub fn process_order(&mut self, cart: &ShoppingCart, customer_email: &str) -> CoreResult<Order> {
        debug!(customer = %customer_email, lines = cart.item_count(), "Processing order");

        if cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        validate_checkout_email(customer_email)?;

        let items: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();

        if let Err(err) = self.inventory.reserve(&items) {
            warn!(customer = %customer_email, error = %err, "Order rejected");
            return Err(err);
        }

        let order = Order::confirmed(
            format!("ORD-{:04}", self.orders.len() + 1),
            Utc::now(),
            customer_email.to_string(),
            items,
            cart.calculate_total(),
        );

        info!(
            order_id = %order.order_id(),
            customer = %customer_email,
            total = %order.total_amount(),
            items = order.items().len(),
            "Order confirmed"
        );

        self.orders.push(order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;
    use crate::promotion::Promotion;
    use crate::types::{OrderStatus, Product};

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_cents(price_cents),
            "misc",
            stock,
        )
        .unwrap()
    }

    fn setup(products: &[Product]) -> (Inventory, OrderProcessor) {
        let inventory = Inventory::from_products(products.iter().cloned());
        let processor = OrderProcessor::new(inventory.clone());
        (inventory, processor)
    }

    #[test]
    fn test_end_to_end_checkout() {
        let p1 = product("p1", 1000, 5);
        let (inventory, mut processor) = setup(&[p1.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 2).unwrap();
        assert_eq!(cart.calculate_subtotal().cents(), 2000);

        cart.add_promotion(Promotion::from_parts("10%off", "percentage", 10.0, Money::zero()));
        assert_eq!(cart.calculate_total().cents(), 1800);

        let order = processor.process_order(&cart, "a@b.com").unwrap();

        assert_eq!(inventory.stock_of("p1"), Some(3));
        assert_eq!(order.total_amount().cents(), 1800);
        assert_eq!(order.order_id(), "ORD-0001");
        assert_eq!(order.customer(), "a@b.com");
        assert_eq!(order.status(), OrderStatus::Confirmed);
        assert_eq!(
            order.items(),
            &[OrderLine {
                product_id: "p1".to_string(),
                quantity: 2
            }]
        );
        assert_eq!(processor.orders(), &[order]);
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let p1 = product("p1", 100, 50);
        let (_, mut processor) = setup(&[p1.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 1).unwrap();

        let ids: Vec<String> = (0..3)
            .map(|_| {
                processor
                    .process_order(&cart, "a@b.com")
                    .unwrap()
                    .order_id()
                    .to_string()
            })
            .collect();

        assert_eq!(ids, vec!["ORD-0001", "ORD-0002", "ORD-0003"]);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let (_, mut processor) = setup(&[]);

        let err = processor
            .process_order(&ShoppingCart::new(), "a@b.com")
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyCart)
        ));
        assert!(processor.orders().is_empty());
    }

    #[test]
    fn test_invalid_email_rejected_before_stock() {
        let p1 = product("p1", 100, 5);
        let (inventory, mut processor) = setup(&[p1.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 2).unwrap();

        for email in ["nobody", "a@localhost", ""] {
            let err = processor.process_order(&cart, email).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::InvalidEmail(_))
            ));
        }
        assert_eq!(inventory.stock_of("p1"), Some(5));
    }

    #[test]
    fn test_out_of_stock_leaves_all_stock_unchanged() {
        let p1 = product("p1", 100, 5);
        let p2 = product("p2", 100, 1);
        let (inventory, mut processor) = setup(&[p1.clone(), p2.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 2).unwrap();
        cart.add_item(&p2, 2).unwrap();

        let err = processor.process_order(&cart, "a@b.com").unwrap_err();

        match err {
            CoreError::OutOfStock {
                product,
                requested,
                available,
            } => {
                assert_eq!(product, "Product p2");
                assert_eq!(requested, 2);
                assert_eq!(available, 1);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }
        assert_eq!(inventory.stock_of("p1"), Some(5));
        assert_eq!(inventory.stock_of("p2"), Some(1));
        assert!(processor.orders().is_empty());
    }

    #[test]
    fn test_stock_checked_against_inventory_not_snapshot() {
        let p1 = product("p1", 100, 5);
        let (inventory, mut processor) = setup(&[p1.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 3).unwrap();

        // Stock sold elsewhere after the snapshot was taken.
        inventory.adjust_stock("p1", -4).unwrap();

        assert!(matches!(
            processor.process_order(&cart, "a@b.com"),
            Err(CoreError::OutOfStock { .. })
        ));
        assert_eq!(inventory.stock_of("p1"), Some(1));
    }

    #[test]
    fn test_product_missing_from_inventory() {
        let (_, mut processor) = setup(&[]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&product("p9", 100, 5), 1).unwrap();

        assert!(matches!(
            processor.process_order(&cart, "a@b.com"),
            Err(CoreError::ProductNotFound(id)) if id == "p9"
        ));
    }

    #[test]
    fn test_order_serializes_with_fixed_keys() {
        let p1 = product("p1", 1000, 5);
        let (_, mut processor) = setup(&[p1.clone()]);

        let mut cart = ShoppingCart::new();
        cart.add_item(&p1, 2).unwrap();
        let order = processor.process_order(&cart, "a@b.com").unwrap();

        let json = serde_json::to_value(&order).unwrap();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec!["customer", "date", "items", "order_id", "status", "total_amount"]
        );
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["total_amount"], 2000);
        assert_eq!(json["items"], serde_json::json!([["p1", 2]]));
    }
}
