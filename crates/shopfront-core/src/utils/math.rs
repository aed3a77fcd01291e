//! Arithmetic helpers.
//!
//! Integer operations report overflow as [`CoreError::Overflow`] instead of
//! wrapping.

use std::f64::consts::PI;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_non_negative;

fn overflow(operation: &str) -> CoreError {
    CoreError::Overflow {
        operation: operation.to_string(),
    }
}

pub fn add(a: i64, b: i64) -> CoreResult<i64> {
    a.checked_add(b).ok_or_else(|| overflow("add"))
}

pub fn subtract(a: i64, b: i64) -> CoreResult<i64> {
    a.checked_sub(b).ok_or_else(|| overflow("subtract"))
}

pub fn multiply(a: i64, b: i64) -> CoreResult<i64> {
    a.checked_mul(b).ok_or_else(|| overflow("multiply"))
}

/// True division; fails only for a zero divisor.
pub fn divide(a: i64, b: i64) -> CoreResult<f64> {
    if b == 0 {
        return Err(CoreError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}

/// `base` raised to a non-negative `exponent`.
pub fn power(base: i64, exponent: i64) -> CoreResult<i64> {
    validate_non_negative("exponent", exponent)?;

    let exponent = u32::try_from(exponent).map_err(|_| overflow("power"))?;
    base.checked_pow(exponent).ok_or_else(|| overflow("power"))
}

/// `n!`. Fits in a `u128` up to `n = 34`.
pub fn factorial(n: i64) -> CoreResult<u128> {
    validate_non_negative("factorial input", n)?;

    (2..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i).ok_or_else(|| overflow("factorial"))
    })
}

/// The first `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
pub fn fibonacci(n: usize) -> CoreResult<Vec<u128>> {
    let mut fib: Vec<u128> = Vec::with_capacity(n);

    for i in 0..n {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => fib[i - 1]
                .checked_add(fib[i - 2])
                .ok_or_else(|| overflow("fibonacci"))?,
        };
        fib.push(next);
    }

    Ok(fib)
}

/// Trial division by odd numbers up to √n.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// All primes `<= limit`, ascending.
pub fn find_primes(limit: i64) -> Vec<i64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}

/// Area of a circle; negative radii are rejected.
pub fn circle_area(radius: f64) -> CoreResult<f64> {
    validate_non_negative("radius", radius)?;
    Ok(PI * radius * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(2, 3).unwrap(), 5);
        assert_eq!(subtract(2, 3).unwrap(), -1);
        assert_eq!(multiply(-4, 3).unwrap(), -12);
        assert!(matches!(add(i64::MAX, 1), Err(CoreError::Overflow { .. })));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(7, 2).unwrap(), 3.5);
        assert_eq!(divide(-9, 3).unwrap(), -3.0);
        assert!(matches!(divide(1, 0), Err(CoreError::DivisionByZero)));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2, 10).unwrap(), 1024);
        assert_eq!(power(5, 0).unwrap(), 1);
        assert_eq!(power(-3, 3).unwrap(), -27);
        assert!(matches!(
            power(2, -1),
            Err(CoreError::Validation(ValidationError::Negative { .. }))
        ));
        assert!(matches!(power(10, 40), Err(CoreError::Overflow { .. })));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert!(factorial(34).is_ok());
        assert!(matches!(factorial(35), Err(CoreError::Overflow { .. })));
        assert!(matches!(
            factorial(-1),
            Err(CoreError::Validation(ValidationError::Negative { .. }))
        ));
    }

    #[test]
    fn test_fibonacci() {
        assert!(fibonacci(0).unwrap().is_empty());
        assert_eq!(fibonacci(1).unwrap(), vec![0]);
        assert_eq!(fibonacci(2).unwrap(), vec![0, 1]);
        assert_eq!(fibonacci(10).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert!(fibonacci(187).is_ok());
        assert!(matches!(fibonacci(188), Err(CoreError::Overflow { .. })));
    }

    #[test]
    fn test_is_prime() {
        for n in [-7, 0, 1, 4, 9, 15, 25, 49, 91] {
            assert!(!is_prime(n), "{} is not prime", n);
        }
        for n in [2, 3, 5, 7, 11, 13, 97, 7919] {
            assert!(is_prime(n), "{} is prime", n);
        }
    }

    #[test]
    fn test_find_primes() {
        assert_eq!(find_primes(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
        assert!(find_primes(1).is_empty());
    }

    #[test]
    fn test_circle_area() {
        assert_eq!(circle_area(0.0).unwrap(), 0.0);
        assert!((circle_area(2.0).unwrap() - 12.566_370_614).abs() < 1e-6);
        assert!(circle_area(-1.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_roundtrips(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(subtract(add(a, b).unwrap(), b).unwrap(), a);
        }

        #[test]
        fn prop_multiply_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            prop_assert_eq!(multiply(a, b).unwrap(), multiply(b, a).unwrap());
        }

        #[test]
        fn prop_divide_only_fails_on_zero(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(divide(a, b).is_err(), b == 0);
        }

        #[test]
        fn prop_factorial_recurrence(n in 2i64..30) {
            prop_assert_eq!(factorial(n).unwrap(), n as u128 * factorial(n - 1).unwrap());
        }

        #[test]
        fn prop_find_primes_strictly_increasing_and_prime(limit in 0i64..2_000) {
            let primes = find_primes(limit);
            prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(primes.iter().all(|&p| is_prime(p) && p <= limit));
        }
    }
}
