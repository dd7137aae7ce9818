//! # fibdev-cli
//!
//! Terminal presentation, sweep progress, and timing-file output.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::ValueFormat;
pub use presenter::{CLIProgressReporter, CLIResultPresenter};
