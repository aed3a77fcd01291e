//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │   OrderLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  order_id       │   │  product_id     │       │
//! │  │  name           │   │  date           │   │  quantity       │       │
//! │  │  price          │   │  customer       │   └─────────────────┘       │
//! │  │  category       │   │  items          │                             │
//! │  │  stock_quantity │   │  total_amount   │   ┌─────────────────┐       │
//! │  └─────────────────┘   │  status         │   │  DiscountRate   │       │
//! │                        └─────────────────┘   │  bps (u32)      │       │
//! │                                              │  1000 = 10%     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name, validate_stock};

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% and 1250 bps = 12.5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage. Negative percentages become zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Stock Invariant
/// `stock_quantity` is never negative. It is private so that every change
/// goes through [`Product::update_stock`], which rejects adjustments that
/// would go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Free-form category (e.g. "electronics").
    pub category: String,

    stock_quantity: i64,
}

impl Product {
    /// Creates a product after validating name, price and stock.
    ///
    /// ```rust
    /// use shopfront_core::{Money, Product};
    ///
    /// let widget = Product::new("p1", "Widget", Money::from_cents(1000), "tools", 5).unwrap();
    /// assert_eq!(widget.stock_quantity(), 5);
    ///
    /// assert!(Product::new("p2", "Gadget", Money::from_cents(-1), "tools", 5).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock_quantity: i64,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock_quantity)?;

        Ok(Product {
            id: id.into(),
            name,
            price,
            category: category.into(),
            stock_quantity,
        })
    }

    /// Current stock level.
    #[inline]
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Adds `delta` to the stock level and returns the new level.
    ///
    /// Negative deltas remove stock. Fails with
    /// [`CoreError::InsufficientStock`] when the result would be negative,
    /// leaving the level untouched.
    pub fn update_stock(&mut self, delta: i64) -> CoreResult<i64> {
        let updated = self
            .stock_quantity
            .checked_add(delta)
            .ok_or_else(|| CoreError::Overflow {
                operation: format!("stock update for {}", self.name),
            })?;

        if updated < 0 {
            return Err(CoreError::InsufficientStock {
                product: self.name.clone(),
                available: self.stock_quantity,
                delta,
            });
        }

        self.stock_quantity = updated;
        Ok(updated)
    }

    /// Checks whether `quantity` units can be taken from current stock.
    #[inline]
    pub fn can_fulfil(&self, quantity: i64) -> bool {
        self.stock_quantity >= quantity
    }
}

// =============================================================================
// Order Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Stock has been deducted and the order is recorded.
    #[default]
    Confirmed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// One `(product_id, quantity)` pair of an order.
///
/// Serializes as a two-element array: `["p1", 2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, i64)", from = "(String, i64)")]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: i64,
}

impl From<OrderLine> for (String, i64) {
    fn from(line: OrderLine) -> Self {
        (line.product_id, line.quantity)
    }
}

impl From<(String, i64)> for OrderLine {
    fn from((product_id, quantity): (String, i64)) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

/// A finalized order.
///
/// Built once by `OrderProcessor::process_order` and never modified; the
/// fields are only reachable through accessors. Serializes to a mapping
/// with the keys `order_id`, `date`, `customer`, `items`, `total_amount`
/// and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_id: String,
    date: DateTime<Utc>,
    customer: String,
    items: Vec<OrderLine>,
    total_amount: Money,
    status: OrderStatus,
}

impl Order {
    pub(crate) fn confirmed(
        order_id: String,
        date: DateTime<Utc>,
        customer: String,
        items: Vec<OrderLine>,
        total_amount: Money,
    ) -> Self {
        Order {
            order_id,
            date,
            customer,
            items,
            total_amount,
            status: OrderStatus::Confirmed,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn items(&self) -> &[OrderLine] {
        &self.items
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}
