//! # Inventory
//!
//! The single owner of product stock.
//!
//! ## Thread Safety
//! The catalog is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several carts may be checked out against the same products
//! 2. A stock check and its deduction must not interleave with another
//!    checkout
//! 3. Handles are cheap to clone and share between threads
//!
//! ## Reservation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reserve([(p1, 2), (p2, 7)])                                            │
//! │                                                                         │
//! │  lock ──► pass 1: every line                                            │
//! │           ├── missing product? ──► ProductNotFound (nothing changed)   │
//! │           └── stock < qty?     ──► OutOfStock      (nothing changed)   │
//! │       ──► pass 2: every line                                            │
//! │           └── update_stock(-qty)                                        │
//! │       ──► unlock                                                        │
//! │                                                                         │
//! │  Both passes run under one lock acquisition, so no other reservation   │
//! │  can observe or cause a partial deduction.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{OrderLine, Product};

/// Shared handle to the product catalog.
///
/// Clones share the same underlying products.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Arc<Mutex<HashMap<String, Product>>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from products. Later duplicates of an id win.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let inventory = Self::new();
        for product in products {
            inventory.insert(product);
        }
        inventory
    }

    // A poisoned lock still holds consistent data: every mutation below
    // validates before writing.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or replaces a product, returning the previous entry.
    pub fn insert(&self, product: Product) -> Option<Product> {
        self.lock().insert(product.id.clone(), product)
    }

    /// A copy of the product as currently stocked.
    pub fn get(&self, product_id: &str) -> Option<Product> {
        self.lock().get(product_id).cloned()
    }

    pub fn stock_of(&self, product_id: &str) -> Option<i64> {
        self.lock().get(product_id).map(Product::stock_quantity)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.lock().contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copies of all products, sorted by id.
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.lock().values().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    /// Restocks (positive delta) or shrinks (negative delta) one product.
    /// Returns the new stock level.
    pub fn adjust_stock(&self, product_id: &str, delta: i64) -> CoreResult<i64> {
        let mut products = self.lock();
        let product = products
            .get_mut(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let level = product.update_stock(delta)?;
        debug!(product_id, delta, level, "Stock adjusted");
        Ok(level)
    }

    /// Atomically checks and deducts stock for every line.
    ///
    /// Either every line is deducted or none is. Lines for the same
    /// product are checked against their combined quantity.
    pub fn reserve(&self, lines: &[OrderLine]) -> CoreResult<()> {
        let mut products = self.lock();

        let mut requested: Vec<(&str, i64)> = Vec::with_capacity(lines.len());
        for line in lines {
            match requested.iter_mut().find(|(id, _)| *id == line.product_id) {
                Some((_, qty)) => *qty += line.quantity,
                None => requested.push((line.product_id.as_str(), line.quantity)),
            }
        }

        for (product_id, qty) in &requested {
            let product = products
                .get(*product_id)
                .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

            if !product.can_fulfil(*qty) {
                return Err(CoreError::OutOfStock {
                    product: product.name.clone(),
                    requested: *qty,
                    available: product.stock_quantity(),
                });
            }
        }

        for (product_id, qty) in &requested {
            if let Some(product) = products.get_mut(*product_id) {
                product.update_stock(-qty)?;
            }
        }

        debug!(lines = requested.len(), "Stock reserved");
        Ok(())
    }
}
