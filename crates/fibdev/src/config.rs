//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibdev_cli::ValueFormat;
use fibdev_core::constants::MAX_LENGTH;

/// fibdev: fixed-width Fibonacci numbers (64 decimal digits) and a
/// character-device emulator serving them by offset.
#[derive(Parser, Debug)]
#[command(name = "fibdev", version, about)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short, long, default_value_t = 100, env = "FIBDEV_N")]
    pub n: u64,

    /// Algorithm to use: fast, iterative, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// How values are printed.
    #[arg(long, value_enum, default_value_t = ValueFormat::Decimal)]
    pub format: ValueFormat,

    /// Sweep the emulated device instead of computing a single index.
    #[arg(long)]
    pub sweep: bool,

    /// Last offset read by a sweep.
    #[arg(long, default_value_t = MAX_LENGTH, env = "FIBDEV_MAX_OFFSET")]
    pub max_offset: u64,

    /// Directory receiving the sweep timing files.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Write the computed value to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
