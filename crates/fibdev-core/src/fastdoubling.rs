//! Fast doubling Fibonacci engine over fixed-capacity integers.
//!
//! Uses the doubling identities:
//!   F(2n)   = F(n) * (2*F(n+1) - F(n))
//!   F(2n+1) = F(n)^2 + F(n+1)^2
//!
//! Iterates from MSB to LSB, four multiplications per bit. Since every
//! operation is exact modulo `BASE^N`, the result is F(k) mod `BASE^N`.

use tracing::trace;

use crate::bignum::FixedBigNumber;
use crate::calculator::Calculator;

/// Advance `(F(n), F(n+1))` by one bit of the index.
///
/// With `bit == false` the pair becomes `(F(2n), F(2n+1))`; with
/// `bit == true` it becomes `(F(2n+1), F(2n+2))`.
#[must_use]
pub fn doubling_step<const N: usize>(
    low: FixedBigNumber<N>,
    high: FixedBigNumber<N>,
    bit: bool,
) -> (FixedBigNumber<N>, FixedBigNumber<N>) {
    let two = FixedBigNumber::<N>::from_u64(2);

    // 2*F(n+1) >= F(n), so the subtraction precondition holds while the
    // pair fits; past capacity the dropped borrow keeps it exact mod BASE^N.
    let t = high * two - low;
    let f2n = low * t;
    let f2n1 = low * low + high * high;

    if bit {
        (f2n1, f2n + f2n1)
    } else {
        (f2n, f2n1)
    }
}

/// Compute F(k) into `N` limbs.
///
/// # Example
/// ```
/// use fibdev_core::fastdoubling::fast_doubling;
///
/// assert_eq!(fast_doubling::<8>(50).to_string(), "12586269025");
/// ```
#[must_use]
pub fn fast_doubling<const N: usize>(k: u64) -> FixedBigNumber<N> {
    if k == 0 {
        return FixedBigNumber::ZERO;
    }

    let num_bits = u64::BITS - k.leading_zeros();
    let mut low = FixedBigNumber::<N>::ZERO;
    let mut high = FixedBigNumber::<N>::ONE;

    // The round for the leading bit takes (F(0), F(1)) to (F(1), F(2)).
    for i in (0..num_bits).rev() {
        (low, high) = doubling_step(low, high, (k >> i) & 1 == 1);
    }

    trace!(k, rounds = num_bits, "fast doubling complete");
    low
}

/// Fast doubling calculator for the default capacity.
///
/// # Example
/// ```
/// use fibdev_core::calculator::Calculator;
/// use fibdev_core::fastdoubling::FastDoubling;
///
/// let calc = FastDoubling::new();
/// assert_eq!(calc.compute(92).to_string(), "7540113804746346429");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for FastDoubling {
    fn compute(&self, k: u64) -> FixedBigNumber {
        fast_doubling(k)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
