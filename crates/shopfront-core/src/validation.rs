//! # Validation Module
//!
//! Input validation for products, carts, checkout and customer contact data.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new ───────► validate_product_name / _price / _stock         │
//! │                                                                         │
//! │  ShoppingCart::add_item / remove_item ──► validate_quantity            │
//! │                                                                         │
//! │  OrderProcessor::process_order ─────────► validate_checkout_email      │
//! │                                                                         │
//! │  Every validator runs before any state is touched.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::validation::{validate_checkout_email, validate_quantity};
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_checkout_email("a@b.com").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name: non-empty after trimming, at most 200 chars.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: 1,
            max: 200,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    validate_non_negative("stock quantity", stock)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ```rust
/// use shopfront_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-2).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Rejects values below zero (radius, exponent, factorial input, stock).
pub fn validate_non_negative<T>(field: &str, value: T) -> ValidationResult<()>
where
    T: PartialOrd + Default,
{
    if value < T::default() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an age in years (0 to 150 inclusive).
pub fn validate_age(age: i64) -> ValidationResult<()> {
    if !(0..=150).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: 150,
        });
    }

    Ok(())
}

// =============================================================================
// Contact Validators
// =============================================================================

/// The email rule applied at checkout.
///
/// Accepts any address containing `@` whose domain part (the text between
/// the first `@` and the next one, if any) contains a `.`. Deliberately
/// looser than [`validate_email`].
pub fn validate_checkout_email(email: &str) -> ValidationResult<()> {
    let domain_has_dot = email
        .split('@')
        .nth(1)
        .is_some_and(|domain| domain.contains('.'));

    if !domain_has_dot {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Strict email validation.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part and domain
/// - Domain contains a `.`
///
/// ```rust
/// use shopfront_core::validation::validate_email;
///
/// assert!(validate_email("jane@example.com").is_ok());
/// assert!(validate_email("jane@@example.com").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing @"))?;

    if domain.contains('@') {
        return Err(invalid("more than one @"));
    }

    if local.is_empty() || domain.is_empty() {
        return Err(invalid("local part and domain are required"));
    }

    if !domain.contains('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

/// Validates a phone number: exactly 10 digits once other characters are
/// stripped, so `(555) 123-4567` passes.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    if digits != 10 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: format!("expected 10 digits, found {}", digits),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("radius", 0.0).is_ok());
        assert!(validate_non_negative("radius", 2.5).is_ok());
        assert_eq!(
            validate_non_negative("radius", -0.1),
            Err(ValidationError::Negative {
                field: "radius".to_string()
            })
        );
        assert!(validate_non_negative("exponent", -1_i64).is_err());
    }

    #[test]
    fn test_validate_checkout_email() {
        assert!(validate_checkout_email("a@b.com").is_ok());
        assert!(validate_checkout_email("first.last@mail.example.org").is_ok());
        // Loose rule: an empty local part still passes.
        assert!(validate_checkout_email("@b.com").is_ok());

        assert!(validate_checkout_email("no-at-sign.com").is_err());
        assert!(validate_checkout_email("a@localhost").is_err());
        assert!(validate_checkout_email("a@b@c.com").is_err());
        assert!(validate_checkout_email("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("jane.example.com").is_err());
        assert!(validate_email("jane@").is_err());
        assert!(validate_email("jane@example").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("555-1234").is_err());
        assert!(validate_phone("+1 555 123 4567").is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age(0).is_ok());
        assert!(validate_age(150).is_ok());
        assert!(validate_age(-1).is_err());
        assert!(validate_age(151).is_err());
    }
}
