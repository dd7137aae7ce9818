//! CLI output formatting and file output.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use fibdev_core::FixedBigNumber;
use fibdev_orchestration::SweepReport;

/// How a value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ValueFormat {
    /// Plain decimal digits.
    #[default]
    Decimal,
    /// Limbs, most significant first, separated by spaces.
    Limbs,
    /// Decimal followed by the limbs in brackets.
    Both,
}

/// Names of the timing files written by [`write_timing_files`].
pub const TIMING_FILES: [&str; 3] = ["user_time.txt", "kernel_time.txt", "kernel_user_time.txt"];

/// Render the limbs most significant first, e.g. `0 0 0 0 0 0 0 55`.
#[must_use]
pub fn format_limbs(value: &FixedBigNumber) -> String {
    let mut out = String::new();
    for (i, limb) in value.limbs_msb_first().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{limb}");
    }
    out
}

/// Render a value in the requested format.
#[must_use]
pub fn format_value(value: &FixedBigNumber, format: ValueFormat) -> String {
    match format {
        ValueFormat::Decimal => value.to_string(),
        ValueFormat::Limbs => format_limbs(value),
        ValueFormat::Both => format!("{value} [{}]", format_limbs(value)),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.000_001 {
        format!("{}ns", d.as_nanos())
    } else if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write a value to a file as decimal digits.
pub fn write_to_file(path: &Path, value: &FixedBigNumber) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    write!(file, "{value}")?;
    debug!(path = %path.display(), digits = value.digit_count(), "value written");
    Ok(())
}

/// Write the per-offset user, device and overhead timings into `dir`.
///
/// Each file holds one `"<offset> <nanoseconds>"` line per sample.
pub fn write_timing_files(dir: &Path, report: &SweepReport) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut user = String::new();
    let mut device = String::new();
    let mut overhead = String::new();
    for s in &report.samples {
        let _ = writeln!(user, "{} {}", s.offset, s.user_ns);
        let _ = writeln!(device, "{} {}", s.offset, s.device_ns);
        let _ = writeln!(overhead, "{} {}", s.offset, s.overhead_ns);
    }

    let mut written = Vec::with_capacity(TIMING_FILES.len());
    for (name, contents) in TIMING_FILES.iter().zip([user, device, overhead]) {
        let path = dir.join(name);
        fs::write(&path, contents)?;
        written.push(path);
    }
    debug!(
        dir = %dir.display(),
        samples = report.samples.len(),
        "timing files written"
    );
    Ok(written)
}
