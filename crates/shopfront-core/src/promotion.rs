//! # Promotions
//!
//! Discount rules evaluated against a cart subtotal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Promotion::apply(subtotal)                                             │
//! │                                                                         │
//! │  subtotal < min_spend? ──yes──► $0.00                                  │
//! │         │ no                                                            │
//! │         ▼                                                               │
//! │  Percentage(rate) ──────────► subtotal × rate (half-up to the cent)    │
//! │  Fixed(amount) ─────────────► min(subtotal, amount)                    │
//! │  Unsupported(type) ─────────► $0.00 (logged)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A cart never stacks promotions: it subtracts the single largest
//! discount (see `ShoppingCart::calculate_total`).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::money::Money;
use crate::types::DiscountRate;

/// The kind of discount named in configuration.
///
/// Unknown names deserialize (and parse) to `Unsupported` instead of
/// failing, so a typo in a promotion list yields a no-op promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
    #[serde(other)]
    Unsupported,
}

impl From<&str> for DiscountType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "percentage" => DiscountType::Percentage,
            "fixed" => DiscountType::Fixed,
            _ => DiscountType::Unsupported,
        }
    }
}

/// How a promotion turns a subtotal into a discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discount {
    /// A share of the subtotal.
    Percentage(DiscountRate),
    /// A flat amount, capped at the subtotal.
    Fixed(Money),
    /// A discount type this crate does not know; holds the raw name.
    Unsupported(String),
}

/// A named discount rule. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    name: String,
    discount: Discount,
    min_spend: Money,
}

impl Promotion {
    /// Creates a promotion with no minimum spend.
    ///
    /// Fixed amounts below zero are clamped to zero.
    pub fn new(name: impl Into<String>, discount: Discount) -> Self {
        let discount = match discount {
            Discount::Fixed(amount) => Discount::Fixed(amount.non_negative()),
            other => other,
        };

        Promotion {
            name: name.into(),
            discount,
            min_spend: Money::zero(),
        }
    }

    /// `percent` off the subtotal (10.0 = 10%).
    pub fn percentage(name: impl Into<String>, percent: f64) -> Self {
        Self::new(name, Discount::Percentage(DiscountRate::from_percentage(percent)))
    }

    /// A flat `amount` off the subtotal.
    pub fn fixed(name: impl Into<String>, amount: Money) -> Self {
        Self::new(name, Discount::Fixed(amount))
    }

    /// Builds a promotion from loosely-typed parts, e.g. a config entry.
    ///
    /// `value` is a percentage for `"percentage"` and an amount in cents
    /// for `"fixed"`. Any other type name produces a promotion that never
    /// discounts.
    ///
    /// ```rust
    /// use shopfront_core::{Money, Promotion};
    ///
    /// let promo = Promotion::from_parts("10%off", "percentage", 10.0, Money::zero());
    /// assert_eq!(promo.apply(Money::from_cents(2000)).cents(), 200);
    ///
    /// let bogus = Promotion::from_parts("bogo", "buy_one_get_one", 1.0, Money::zero());
    /// assert!(bogus.apply(Money::from_cents(2000)).is_zero());
    /// ```
    pub fn from_parts(
        name: impl Into<String>,
        discount_type: &str,
        value: f64,
        min_spend: Money,
    ) -> Self {
        let discount = match DiscountType::from(discount_type) {
            DiscountType::Percentage => Discount::Percentage(DiscountRate::from_percentage(value)),
            DiscountType::Fixed => Discount::Fixed(Money::from_cents(value.round() as i64)),
            DiscountType::Unsupported => Discount::Unsupported(discount_type.to_string()),
        };

        Self::new(name, discount).with_min_spend(min_spend)
    }

    /// Sets the minimum subtotal below which the promotion yields nothing.
    pub fn with_min_spend(mut self, min_spend: Money) -> Self {
        self.min_spend = min_spend;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discount(&self) -> &Discount {
        &self.discount
    }

    pub fn discount_type(&self) -> DiscountType {
        match self.discount {
            Discount::Percentage(_) => DiscountType::Percentage,
            Discount::Fixed(_) => DiscountType::Fixed,
            Discount::Unsupported(_) => DiscountType::Unsupported,
        }
    }

    pub fn min_spend(&self) -> Money {
        self.min_spend
    }

    /// Returns the discount this promotion grants on `subtotal`.
    ///
    /// Never more than the subtotal for fixed amounts; zero below the
    /// minimum spend.
    pub fn apply(&self, subtotal: Money) -> Money {
        if subtotal < self.min_spend {
            return Money::zero();
        }

        match &self.discount {
            Discount::Percentage(rate) => subtotal.percentage_of(*rate),
            Discount::Fixed(amount) => subtotal.min(*amount),
            Discount::Unsupported(discount_type) => {
                warn!(
                    promotion = %self.name,
                    discount_type = %discount_type,
                    "Unsupported discount type, no discount applied"
                );
                Money::zero()
            }
        }
    }
}
