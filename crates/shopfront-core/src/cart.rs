//! # Shopping Cart
//!
//! Collects products and quantities, prices them, and picks the best
//! promotion.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                   Cart State Change                          │
//! │  ─────────                   ─────────────────                          │
//! │                                                                         │
//! │  add_item(p, 2) ───────────► new line, or line.quantity += 2           │
//! │                              (snapshot of p replaced)                   │
//! │                                                                         │
//! │  remove_item(id, 1) ───────► line.quantity -= 1, or line removed       │
//! │                              when quantity would reach 0                │
//! │                                                                         │
//! │  add_promotion(promo) ─────► promotions.push(promo)                    │
//! │                                                                         │
//! │  calculate_total() ────────► subtotal - max(promo.apply(subtotal))     │
//! │                              (read only, clamped at $0.00)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart holds product *snapshots* for pricing. Stock lives in the
//! [`Inventory`](crate::inventory::Inventory); the snapshot's stock level
//! is never consulted at checkout.

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::types::{DiscountRate, OrderLine, Product};
use crate::validation::validate_quantity;

/// A product and how many of it the cart holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    pub fn product_id(&self) -> &str {
        &self.product.id
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        OrderLine {
            product_id: line.product.id.clone(),
            quantity: line.quantity,
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product again
///   increases its quantity)
/// - Every line has quantity > 0
/// - Lines keep insertion order
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    lines: Vec<CartLine>,
    promotions: Vec<Promotion>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of `product`.
    ///
    /// Fails with a validation error when `quantity <= 0`. Re-adding a
    /// product accumulates its quantity and replaces the stored snapshot,
    /// so the latest price wins.
    ///
    /// Fails with [`CoreError::Overflow`] and leaves the cart unchanged
    /// when the new line total, subtotal or unit count would not fit in
    /// an `i64`.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let index = self.lines.iter().position(|l| l.product.id == product.id);
        let new_quantity = match index {
            Some(i) => self.lines[i]
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| cart_overflow(&product.id))?,
            None => quantity,
        };

        let prospective = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, l)| {
                if Some(i) == index {
                    (product.price, new_quantity)
                } else {
                    (l.product.price, l.quantity)
                }
            })
            .chain(index.is_none().then_some((product.price, new_quantity)));

        checked_totals(prospective).ok_or_else(|| cart_overflow(&product.id))?;

        match index {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = new_quantity;
                line.product = product.clone();
            }
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Removes `quantity` units of a product.
    ///
    /// ## Behavior
    /// - Product not in cart: [`CoreError::ItemNotInCart`]
    /// - `quantity <= 0`: validation error
    /// - `quantity >= current`: the whole line is removed
    /// - otherwise: the line is decremented
    pub fn remove_item(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product.id == product_id)
            .ok_or_else(|| CoreError::ItemNotInCart(product_id.to_string()))?;

        validate_quantity(quantity)?;

        if quantity >= self.lines[index].quantity {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity -= quantity;
        }

        Ok(())
    }

    /// Sum of price × quantity over all lines, before discounts.
    ///
    /// `add_item` refuses any line that would make this overflow.
    pub fn calculate_subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The largest discount any applied promotion grants on the current
    /// subtotal. Promotions never stack.
    pub fn best_discount(&self) -> Money {
        let subtotal = self.calculate_subtotal();

        self.promotions
            .iter()
            .map(|promo| promo.apply(subtotal))
            .max()
            .unwrap_or_default()
    }

    /// Subtotal minus the best discount, never below zero.
    pub fn calculate_total(&self) -> Money {
        (self.calculate_subtotal() - self.best_discount()).non_negative()
    }

    /// Appends a promotion. Order is kept and duplicates are allowed.
    pub fn add_promotion(&mut self, promo: Promotion) {
        self.promotions.push(promo);
    }

    /// Adds a fixed-amount promotion worth `discount_percent` of the
    /// current subtotal when the cart holds at least `threshold` units.
    ///
    /// The amount is frozen at call time; later cart changes do not
    /// recompute it. Returns whether a promotion was added.
    pub fn apply_bulk_discount(&mut self, threshold: i64, discount_percent: f64) -> bool {
        let total_items = self.total_quantity();
        if total_items < threshold {
            return false;
        }

        let amount = self
            .calculate_subtotal()
            .percentage_of(DiscountRate::from_percentage(discount_percent));

        debug!(
            threshold,
            total_items,
            amount = %amount,
            "Bulk discount applied"
        );

        self.add_promotion(Promotion::fixed(
            format!("Bulk Discount (> {} items)", threshold),
            amount,
        ));
        true
    }

    /// Quantity of a product, or 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// The stored snapshot of a product.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.line(product_id).map(|l| &l.product)
    }

    fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines and promotions.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promotions.clear();
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

fn cart_overflow(product_id: &str) -> CoreError {
    CoreError::Overflow {
        operation: format!("cart totals when adding {}", product_id),
    }
}

/// Subtotal and unit count for `(price, quantity)` lines, summed in order,
/// or `None` if any step overflows.
fn checked_totals(mut lines: impl Iterator<Item = (Money, i64)>) -> Option<(Money, i64)> {
    lines.try_fold((Money::zero(), 0i64), |(subtotal, units), (price, qty)| {
        let subtotal = subtotal.checked_add(price.checked_mul(qty)?)?;
        let units = units.checked_add(qty)?;
        Some((subtotal, units))
    })
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl From<&ShoppingCart> for CartTotals {
    fn from(cart: &ShoppingCart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.calculate_subtotal(),
            discount: cart.best_discount(),
            total: cart.calculate_total(),
        }
    }
}
