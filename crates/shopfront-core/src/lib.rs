//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! Products, carts, promotions and order processing as plain in-memory
//! types with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shopfront-cli                                │   │
//! │  │    config (TOML + env) ──► catalog / quote / checkout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ promotion │  │   cart    │  │   order   │  │   │
//! │  │   │  Product  │  │ Promotion │  │ Shopping- │  │  Order-   │  │   │
//! │  │   │  Order    │  │ Discount  │  │   Cart    │  │ Processor │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └─────┬─────┘  │   │
//! │  │                                                      │        │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────────────▼─────┐  │   │
//! │  │   │   money   │  │validation │  │  inventory (Arc<Mutex>) │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, DiscountRate)
//! - [`money`] - Money type with integer arithmetic
//! - [`promotion`] - Discount rules
//! - [`cart`] - Shopping cart and totals
//! - [`inventory`] - Shared stock authority
//! - [`order`] - Order processing
//! - [`validation`] - Input validation
//! - [`utils`] - Arithmetic, string and list helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Inventory, Money, OrderProcessor, Product, Promotion, ShoppingCart};
//!
//! let widget = Product::new("p1", "Widget", Money::from_cents(1000), "tools", 5).unwrap();
//! let inventory = Inventory::from_products([widget.clone()]);
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item(&widget, 2).unwrap();
//! cart.add_promotion(Promotion::percentage("10%off", 10.0));
//! assert_eq!(cart.calculate_total(), Money::from_cents(1800));
//!
//! let mut processor = OrderProcessor::new(inventory.clone());
//! let order = processor.process_order(&cart, "a@b.com").unwrap();
//! assert_eq!(order.total_amount(), Money::from_cents(1800));
//! assert_eq!(inventory.stock_of("p1"), Some(3));
//! ```

pub mod cart;
pub mod error;
pub mod inventory;
pub mod money;
pub mod order;
pub mod promotion;
pub mod types;
pub mod utils;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartTotals, ShoppingCart};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use order::OrderProcessor;
pub use promotion::{Discount, DiscountType, Promotion};
pub use types::*;
