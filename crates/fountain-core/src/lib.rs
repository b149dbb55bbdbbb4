//! # fountain-core
//!
//! Core library for Fountain, an extended FizzBuzz sequence generator.
//! Supports arbitrary integer ranges, unbounded and reverse iteration, and
//! configurable divisors over arbitrary-magnitude integers.

pub mod cursor;
pub mod errors;
pub mod fountain;

// Re-exports
pub use cursor::Labels;
pub use errors::FountainError;
pub use fountain::Fountain;

use num_bigint::BigInt;

/// Label a single integer with the classic (3, 5) divisors.
///
/// This is a convenience function for simple use cases. For configurable
/// divisors, ranges, and slices, use [`Fountain`] directly.
///
/// # Example
/// ```
/// assert_eq!(fountain_core::fizzbuzz(15), "FizzBuzz");
/// assert_eq!(fountain_core::fizzbuzz(-4), "-4");
/// ```
#[must_use]
pub fn fizzbuzz(n: impl Into<BigInt>) -> String {
    Fountain::default()
        .at(n)
        .expect("default divisors are nonzero")
}
