//! Linear-time reference calculator.
//!
//! O(k) additions over the same fixed-capacity type. Slow, but it only uses
//! `+`, so it cross-checks the multiply and subtract paths of fast doubling.

use crate::bignum::FixedBigNumber;
use crate::calculator::Calculator;
use crate::constants::MAX_ITERATIVE_INDEX;

/// Compute F(k) into `N` limbs by repeated addition.
#[must_use]
pub fn iterate<const N: usize>(k: u64) -> FixedBigNumber<N> {
    let mut prev = FixedBigNumber::<N>::ZERO;
    let mut curr = FixedBigNumber::<N>::ONE;
    for _ in 0..k {
        (prev, curr) = (curr, prev + curr);
    }
    prev
}

/// Iterative calculator for the default capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl Iterative {
    /// Create a new `Iterative` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for Iterative {
    fn compute(&self, k: u64) -> FixedBigNumber {
        iterate(k)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn max_index(&self) -> u64 {
        MAX_ITERATIVE_INDEX
    }
}
