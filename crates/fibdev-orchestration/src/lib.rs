//! # fibdev-orchestration
//!
//! Calculator cross-validation and the device sweep driver.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;
pub mod sweep;

pub use calculator_selection::get_calculators_to_run;
pub use interfaces::{CalculationResult, ProgressReporter, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
pub use sweep::{run_sweep, Sample, SweepConfig, SweepError, SweepReport};
