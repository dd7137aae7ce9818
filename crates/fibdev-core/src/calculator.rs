//! The `Calculator` trait and the error type shared by the outer layers.
//!
//! The arithmetic itself never fails; `FibError` covers selection and
//! verification problems around it.

use std::time::{Duration, Instant};

use crate::bignum::FixedBigNumber;

/// Error type for calculator selection and cross-checking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A calculation produced no usable result.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different calculators don't match.
    #[error("result mismatch between algorithms for F({index})")]
    Mismatch {
        /// Index whose results disagreed.
        index: u64,
    },
}

/// A computed value together with the time it took.
///
/// Each computation carries its own duration; nothing is kept globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// The computed Fibonacci number.
    pub value: FixedBigNumber,
    /// Wall-clock time spent in `compute`.
    pub elapsed: Duration,
}

/// A way of computing F(k) into the default fixed capacity.
pub trait Calculator: Send + Sync {
    /// Compute F(k), truncated to the fixed capacity.
    fn compute(&self, k: u64) -> FixedBigNumber;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;

    /// Largest index this calculator accepts in reasonable time.
    fn max_index(&self) -> u64 {
        u64::MAX
    }

    /// Compute F(k) and time it.
    fn measure(&self, k: u64) -> Measurement {
        let start = Instant::now();
        let value = self.compute(k);
        Measurement {
            value,
            elapsed: start.elapsed(),
        }
    }
}
