//! CLI result presenter and sweep progress bar.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use fibdev_core::constants::MAX_EXACT_INDEX;
use fibdev_orchestration::{CalculationResult, ProgressReporter, ResultPresenter, SweepReport};

use crate::output::{format_duration, format_limbs, format_value, ValueFormat};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    format: ValueFormat,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, format: ValueFormat) -> Self {
        Self {
            verbose,
            quiet,
            format,
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, details: bool) {
        let value = format_value(&result.value, self.format);
        if self.quiet {
            println!("{value}");
            return;
        }

        println!("Algorithm: {}", result.algorithm);
        println!("Duration: {}", format_duration(result.duration));

        if details {
            println!("Result digits: {}", result.value.digit_count());
            println!("Limbs: {}", format_limbs(&result.value));
            if result.index > MAX_EXACT_INDEX {
                println!("Truncated: yes (value is F({}) mod 10^64)", result.index);
            }
        }

        println!("F({}) = {value}", result.index);
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        let reference = results.first().map(|r| r.value);
        for result in results {
            let agrees = Some(result.value) == reference;
            let status = match (agrees, is_color_disabled()) {
                (true, true) => "OK".to_string(),
                (false, true) => "MISMATCH".to_string(),
                (true, false) => style("OK").green().to_string(),
                (false, false) => style("MISMATCH").red().bold().to_string(),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_sweep(&self, report: &SweepReport) {
        for sample in &report.samples {
            let value = format_value(&sample.value, self.format);
            if self.quiet {
                println!("{} {value}", sample.offset);
            } else if self.verbose {
                println!(
                    "Reading at offset {}, returned the sequence {value} (user {}ns, device {}ns)",
                    sample.offset, sample.user_ns, sample.device_ns,
                );
            } else {
                println!(
                    "Reading at offset {}, returned the sequence {value}",
                    sample.offset
                );
            }
        }

        if !self.quiet {
            println!(
                "{} writes accepted {} bytes; {} offsets read forward and back with {}",
                report.writes,
                report.bytes_accepted,
                report.samples.len(),
                report.algorithm,
            );
        }
    }

    fn present_error(&self, error: &str) {
        if is_color_disabled() {
            eprintln!("Error: {error}");
        } else {
            eprintln!("{} {error}", style("Error:").red().bold());
        }
    }
}

/// Progress bar shown while a sweep runs.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a reporter; a hidden bar is used when `quiet` is set.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        if let Ok(bar_style) =
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} reads ({elapsed})")
        {
            bar.set_style(bar_style.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, done: u64, total: u64) {
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.set_position(done);
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
