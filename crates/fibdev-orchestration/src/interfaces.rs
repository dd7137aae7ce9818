//! Orchestration interfaces.

use std::time::Duration;

use fibdev_core::FixedBigNumber;

use crate::sweep::SweepReport;

/// Trait for reporting sweep progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report that `done` of `total` reads have finished.
    fn report(&self, done: u64, total: u64);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single calculation result.
    fn present_result(&self, result: &CalculationResult, details: bool);

    /// Present a side-by-side comparison of several calculators.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present a completed sweep.
    fn present_sweep(&self, report: &SweepReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Requested index.
    pub index: u64,
    /// The computed value.
    pub value: FixedBigNumber,
    /// Computation duration.
    pub duration: Duration,
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _done: u64, _total: u64) {}
    fn complete(&self) {}
}
