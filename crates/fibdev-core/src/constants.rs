//! Radix, capacity and index bounds for the fixed-width representation.

/// Radix of a single limb.
///
/// Chosen so that one limb product plus two carries stays far below `2^63`.
pub const BASE: u64 = 100_000_000;

/// Decimal digits held by one limb.
pub const DIGITS_PER_LIMB: usize = 8;

/// Default number of limbs in a `FixedBigNumber`.
pub const LIMBS: usize = 8;

/// Decimal digits representable with the default capacity.
pub const CAPACITY_DIGITS: usize = LIMBS * DIGITS_PER_LIMB;

/// Largest index a device session may seek to.
pub const MAX_LENGTH: u64 = 100;

/// Largest index whose Fibonacci number fits in the default capacity.
///
/// F(307) has 64 digits, F(308) has 65.
pub const MAX_EXACT_INDEX: u64 = 307;

/// Decimal digits added per unit of index (log10 of the golden ratio).
pub const DIGITS_PER_INDEX: f64 = 0.208_987_640_249_978_7;

/// log10(sqrt(5)), the constant offset in Binet's digit estimate.
const LOG10_SQRT5: f64 = 0.349_485_002_168_009_4;

/// Largest index served by the linear-time calculator.
///
/// One addition per index, so this bounds a run to a few seconds.
pub const MAX_ITERATIVE_INDEX: u64 = 100_000_000;

/// Number of decimal digits of F(k).
///
/// Binet's formula gives `floor(k * log10(phi) - log10(sqrt(5))) + 1` for k >= 2.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fib_digits(k: u64) -> usize {
    if k < 2 {
        return 1;
    }
    (k as f64 * DIGITS_PER_INDEX - LOG10_SQRT5).floor() as usize + 1
}

/// Number of limbs needed to hold F(k) without truncation.
///
/// F(k) grows by about 0.209 decimal digits per index, so BASE and the limb
/// count have to be revisited together whenever the supported range changes.
#[must_use]
pub fn required_limbs(k: u64) -> usize {
    fib_digits(k).div_ceil(DIGITS_PER_LIMB)
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Calculators or sweep passes disagreed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Device already held by another session (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
