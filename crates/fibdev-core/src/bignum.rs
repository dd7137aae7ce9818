//! Fixed-capacity unsigned integers in radix 10^8.
//!
//! A `FixedBigNumber<N>` holds exactly `N` limbs, least significant first.
//! Every limb stays in `[0, BASE)` between operations. Arithmetic never grows
//! the representation: anything that would land past limb `N - 1` is dropped,
//! so `+`, `-` and `*` are all exact modulo `BASE^N`.

use std::fmt::{self, Write as _};
use std::ops::{Add, Mul, Sub};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::{BASE, DIGITS_PER_LIMB, LIMBS};

/// Size in bytes of one encoded limb.
const LIMB_BYTES: usize = 8;

/// Unsigned integer with a fixed number of base-10^8 limbs.
///
/// Values are plain `Copy` data; operations return new values and never
/// touch their operands.
///
/// # Example
/// ```
/// use fibdev_core::FixedBigNumber;
///
/// let a = FixedBigNumber::<8>::from_u64(99_999_999);
/// let b = FixedBigNumber::<8>::ONE;
/// assert_eq!((a + b).limbs()[..2], [0, 1]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedBigNumber<const N: usize = LIMBS> {
    limbs: [u64; N],
}

impl<const N: usize> FixedBigNumber<N> {
    /// The value 0.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// The value 1.
    pub const ONE: Self = {
        let mut limbs = [0; N];
        limbs[0] = 1;
        Self { limbs }
    };

    /// Number of bytes produced by [`encode_into`](Self::encode_into).
    pub const ENCODED_LEN: usize = N * LIMB_BYTES;

    /// Build a value from `u64`, dropping any limbs past `N`.
    #[must_use]
    pub fn from_u64(mut value: u64) -> Self {
        let mut out = Self::ZERO;
        for limb in &mut out.limbs {
            *limb = value % BASE;
            value /= BASE;
        }
        out
    }

    /// Build a value from little-endian limbs.
    ///
    /// # Panics
    ///
    /// Panics if any limb is `BASE` or larger. Use [`decode`](Self::decode)
    /// for untrusted input.
    #[must_use]
    pub fn from_limbs(limbs: [u64; N]) -> Self {
        assert!(limbs.iter().all(|&l| l < BASE), "limb out of range");
        Self { limbs }
    }

    /// Reduce an arbitrary `BigUint` modulo `BASE^N`.
    #[must_use]
    pub fn from_biguint_truncated(value: &BigUint) -> Self {
        let base = BigUint::from(BASE);
        let mut rest = value.clone();
        let mut out = Self::ZERO;
        for limb in &mut out.limbs {
            *limb = (&rest % &base).to_u64().unwrap_or_default();
            rest /= &base;
        }
        out
    }

    /// Limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u64; N] {
        &self.limbs
    }

    /// Limbs, most significant first (the order used for printing).
    pub fn limbs_msb_first(&self) -> impl Iterator<Item = u64> + '_ {
        self.limbs.iter().rev().copied()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Number of decimal digits in the represented value (1 for zero).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        match self.limbs.iter().rposition(|&l| l != 0) {
            None => 1,
            Some(top) => top * DIGITS_PER_LIMB + self.limbs[top].to_string().len(),
        }
    }

    /// Widen to an arbitrary-precision integer.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &limb| acc * BASE + limb)
    }

    /// Write the limbs as little-endian `u64` words, limb 0 first.
    ///
    /// Returns `None` without touching `buf` when it is shorter than
    /// [`ENCODED_LEN`](Self::ENCODED_LEN).
    pub fn encode_into(&self, buf: &mut [u8]) -> Option<usize> {
        let out = buf.get_mut(..Self::ENCODED_LEN)?;
        for (chunk, limb) in out.chunks_exact_mut(LIMB_BYTES).zip(&self.limbs) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        Some(Self::ENCODED_LEN)
    }

    /// Inverse of [`encode_into`](Self::encode_into).
    ///
    /// Rejects short buffers and limbs outside `[0, BASE)`.
    #[must_use]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let input = buf.get(..Self::ENCODED_LEN)?;
        let mut out = Self::ZERO;
        for (limb, chunk) in out.limbs.iter_mut().zip(input.chunks_exact(LIMB_BYTES)) {
            let value = u64::from_le_bytes(chunk.try_into().ok()?);
            if value >= BASE {
                return None;
            }
            *limb = value;
        }
        Some(out)
    }
}

impl<const N: usize> Default for FixedBigNumber<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<u64> for FixedBigNumber<N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Limb-wise addition; the carry out of the top limb is discarded.
impl<const N: usize> Add for FixedBigNumber<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        let mut carry = 0;
        for ((o, &a), &b) in out.limbs.iter_mut().zip(&self.limbs).zip(&rhs.limbs) {
            let sum = carry + a + b;
            *o = sum % BASE;
            carry = sum / BASE;
        }
        out
    }
}

/// Limb-wise subtraction with borrow.
///
/// Only meaningful for `self >= rhs`. Otherwise the borrow out of the top
/// limb is dropped and the limbs hold `self - rhs + BASE^N`.
impl<const N: usize> Sub for FixedBigNumber<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        let mut borrow = 0;
        for ((o, &a), &b) in out.limbs.iter_mut().zip(&self.limbs).zip(&rhs.limbs) {
            let take = b + borrow;
            if a >= take {
                *o = a - take;
                borrow = 0;
            } else {
                *o = a + BASE - take;
                borrow = 1;
            }
        }
        out
    }
}

/// Truncating schoolbook product.
///
/// Partial products are only accumulated at positions `i + j < N`; the carry
/// leaving position `N - 1` is dropped.
impl<const N: usize> Mul for FixedBigNumber<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.limbs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry = 0;
            for (j, &b) in rhs.limbs[..N - i].iter().enumerate() {
                let acc = a * b + carry + out.limbs[i + j];
                out.limbs[i + j] = acc % BASE;
                carry = acc / BASE;
            }
        }
        out
    }
}

impl<const N: usize> fmt::Display for FixedBigNumber<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(top) = self.limbs.iter().rposition(|&l| l != 0) else {
            return f.pad("0");
        };
        let mut s = String::with_capacity((top + 1) * DIGITS_PER_LIMB);
        write!(s, "{}", self.limbs[top])?;
        for limb in self.limbs[..top].iter().rev() {
            write!(s, "{limb:0width$}", width = DIGITS_PER_LIMB)?;
        }
        f.pad(&s)
    }
}

/// Serialises as the limb sequence, most significant first.
#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for FixedBigNumber<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.limbs_msb_first())
    }
}
