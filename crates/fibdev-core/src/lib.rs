//! # fibdev-core
//!
//! Fixed-capacity big integers in radix 10^8 and the fast doubling Fibonacci
//! engine built on them. Results are exact up to the capacity of the type and
//! silently truncated (modulo `BASE^N`) beyond it.

pub mod bignum;
pub mod calculator;
pub mod constants;
pub mod fastdoubling;
pub mod iterative;
pub mod registry;

// Re-exports
pub use bignum::FixedBigNumber;
pub use calculator::{Calculator, FibError, Measurement};
pub use constants::{exit_codes, BASE, LIMBS, MAX_EXACT_INDEX, MAX_LENGTH};
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(k) using the fast doubling engine.
///
/// # Example
/// ```
/// assert_eq!(fibdev_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibdev_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(k: u64) -> FixedBigNumber {
    fastdoubling::fast_doubling(k)
}
