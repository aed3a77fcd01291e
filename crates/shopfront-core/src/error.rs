//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Stock, lookup and arithmetic failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-cli errors (separate crate)                                 │
//! │  └── CliError         - Config, I/O and argument failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is retried or recovered internally. A failed operation
//! leaves no partial state behind and the caller decides what to do.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stock adjustment would drive the level below zero.
    ///
    /// Raised by `Product::update_stock` and `Inventory::adjust_stock`.
    #[error("Insufficient stock for {product}: available {available}, change {delta}")]
    InsufficientStock {
        product: String,
        available: i64,
        delta: i64,
    },

    /// An order requested more units than are currently in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: Widget × 5
    ///      │
    ///      ▼
    /// process_order() checks stock: available = 3
    ///      │
    ///      ▼
    /// OutOfStock { product: "Widget", requested: 5, available: 3 }
    ///      │
    ///      ▼
    /// No stock touched, no order recorded
    /// ```
    #[error("Out of stock for {product}. Requested: {requested}, Available: {available}")]
    OutOfStock {
        product: String,
        requested: i64,
        available: i64,
    },

    /// The product id is not in the cart.
    #[error("Product not in cart: {0}")]
    ItemNotInCart(String),

    /// The product id is not in the inventory.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Division with a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// An integer result does not fit its type.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive (e.g. a cart quantity).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (radius, exponent, factorial input, stock).
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Checkout was attempted on a cart without items.
    #[error("Cannot process empty cart")]
    EmptyCart,

    /// The customer email failed the checkout email rule.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
