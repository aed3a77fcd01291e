//! # Money Module
//!
//! Provides the `Money` type for prices, subtotals, discounts and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    $20.00 - 10% = $17.999999999999996 in f64                            │
//! │                                                                         │
//! │  Integer cents:                                                         │
//! │    2000 cents - (2000 × 1000 bps + 5000) / 10000 = 1800 cents           │
//! │    Exactly $18.00, every time                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//! use shopfront_core::types::DiscountRate;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let subtotal = price * 2;            // $20.00
//! let discount = subtotal.percentage_of(DiscountRate::from_percentage(10.0));
//! assert_eq!((subtotal - discount).cents(), 1800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that intermediate results (subtotal minus an oversized
/// discount) are representable before being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `rate` of this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// `(amount * bps + 5000) / 10000`, computed in i128. Rates above
    /// 100% can push the result past `i64`; it saturates at the bounds.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(1999);
    /// let ten_percent = subtotal.percentage_of(DiscountRate::from_bps(1000));
    /// assert_eq!(ten_percent.cents(), 200); // 199.9 → 200
    /// ```
    pub fn percentage_of(&self, rate: DiscountRate) -> Money {
        let cents = (i128::from(self.0) * i128::from(rate.bps()) + 5000) / 10000;
        let cents = i64::try_from(cents).unwrap_or(if cents < 0 { i64::MIN } else { i64::MAX });
        Money::from_cents(cents)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// Panics on overflow in debug builds; use [`Money::checked_mul`] for
    /// untrusted quantities.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// `self * qty`, or `None` on overflow.
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `self + other`, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Clamps negative values to zero.
    #[inline]
    pub fn non_negative(self) -> Self {
        self.max(Money::zero())
    }
}

/// Shows money as `$10.99` / `-$5.50`.
///
/// Store-specific formatting (currency symbol, code) lives in the app.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_mul_and_add() {
        let price = Money::from_cents(1000);
        assert_eq!(price.checked_mul(3), Some(Money::from_cents(3000)));
        assert_eq!(price.checked_mul(i64::MAX / 100), None);

        assert_eq!(
            price.checked_add(Money::from_cents(1)),
            Some(Money::from_cents(1001))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_percentage_of_saturates() {
        // 400% of a near-max amount does not fit in i64
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(
            huge.percentage_of(DiscountRate::from_bps(40_000)),
            Money::from_cents(i64::MAX)
        );

        let negative = Money::from_cents(i64::MIN / 2);
        assert_eq!(
            negative.percentage_of(DiscountRate::from_bps(40_000)),
            Money::from_cents(i64::MIN)
        );
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 650]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1000);
    }

    #[test]
    fn test_percentage_of_rounds_half_up() {
        let amount = Money::from_cents(2000);
        assert_eq!(amount.percentage_of(DiscountRate::from_bps(1000)).cents(), 200);

        // 1005 × 5% = 50.25 → 50
        let amount = Money::from_cents(1005);
        assert_eq!(amount.percentage_of(DiscountRate::from_bps(500)).cents(), 50);

        // 1010 × 5% = 50.5 → 51
        let amount = Money::from_cents(1010);
        assert_eq!(amount.percentage_of(DiscountRate::from_bps(500)).cents(), 51);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::from_cents(-300).non_negative(), Money::zero());
        assert_eq!(Money::from_cents(300).non_negative().cents(), 300);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
