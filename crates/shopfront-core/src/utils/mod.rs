//! # Utilities
//!
//! Small stateless helpers that sit beside the commerce core.
//!
//! - [`math`] - checked arithmetic, factorial, Fibonacci, primes, geometry
//! - [`text`] - string transforms, word counts, currency formatting
//! - [`numbers`] - filters and summaries over integer slices

pub mod math;
pub mod numbers;
pub mod text;
