//! Device sweep: the benchmarking client.
//!
//! Probes the write path, reads every offset in `0..=max_offset` while timing
//! each read from the caller's side and from the device's side, then reads
//! the range again in reverse and checks both passes agree.

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use fibdev_core::constants::MAX_LENGTH;
use fibdev_core::FixedBigNumber;
use fibdev_device::{DeviceError, FibDevice, Session};

use crate::interfaces::ProgressReporter;

/// Payload used for the write probe.
const WRITE_PROBE: &[u8] = b"testing writing";

/// Errors produced by a sweep.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The device could not be opened.
    #[error(transparent)]
    Device(#[from] DeviceError),

    /// A seek, read or write on the session failed.
    #[error("device I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The sweep range goes past what the device serves.
    #[error("max offset {max_offset} exceeds device limit {limit}")]
    OffsetOutOfRange {
        /// Requested upper bound.
        max_offset: u64,
        /// Device limit.
        limit: u64,
    },

    /// A read returned bytes that are not a valid value.
    #[error("undecodable value at offset {offset}")]
    Decode {
        /// Offset of the bad read.
        offset: u64,
    },

    /// The reverse pass disagreed with the forward pass.
    #[error("forward and reverse reads differ at offset {offset}")]
    Mismatch {
        /// Offset of the disagreement.
        offset: u64,
    },
}

/// Sweep parameters.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Last offset read (inclusive).
    pub max_offset: u64,
    /// Number of write probes issued before reading.
    pub writes: u64,
}

impl SweepConfig {
    /// Sweep `0..=max_offset` with one write probe per offset.
    #[must_use]
    pub fn new(max_offset: u64) -> Self {
        Self {
            max_offset,
            writes: max_offset.saturating_add(1),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(MAX_LENGTH)
    }
}

/// One forward-pass read.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    /// Fibonacci index.
    pub offset: u64,
    /// Value read back, limbs most significant first.
    pub value: FixedBigNumber,
    /// Decimal rendering of `value`.
    pub decimal: String,
    /// Caller-side time around the read, in nanoseconds.
    pub user_ns: u64,
    /// Device-side compute time, in nanoseconds.
    pub device_ns: u64,
    /// `user_ns - device_ns`: the cost of crossing the device boundary.
    pub overhead_ns: i64,
}

impl Sample {
    fn new(offset: u64, value: FixedBigNumber, user: Duration, device: Duration) -> Self {
        let user_ns = duration_ns(user);
        let device_ns = duration_ns(device);
        let overhead = i128::from(user_ns) - i128::from(device_ns);
        Self {
            offset,
            value,
            decimal: value.to_string(),
            user_ns,
            device_ns,
            overhead_ns: i64::try_from(overhead).unwrap_or(i64::MAX),
        }
    }
}

/// Outcome of a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Calculator behind the device.
    pub algorithm: &'static str,
    /// Write probes issued.
    pub writes: u64,
    /// Sum of byte counts the device reported for the probes.
    pub bytes_accepted: u64,
    /// Forward-pass samples, ordered by offset.
    pub samples: Vec<Sample>,
}

fn duration_ns(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

fn read_at(session: &mut Session, offset: u64, buf: &mut [u8]) -> Result<FixedBigNumber, SweepError> {
    session.seek(SeekFrom::Start(offset))?;
    let n = session.read(buf)?;
    FixedBigNumber::decode(&buf[..n]).ok_or(SweepError::Decode { offset })
}

/// Run a full sweep against `device`.
///
/// Holds the device's single session for the whole run.
pub fn run_sweep(
    device: &FibDevice,
    config: &SweepConfig,
    reporter: &dyn ProgressReporter,
) -> Result<SweepReport, SweepError> {
    if config.max_offset > device.max_length() {
        return Err(SweepError::OffsetOutOfRange {
            max_offset: config.max_offset,
            limit: device.max_length(),
        });
    }

    let mut session = device.open()?;

    let mut bytes_accepted = 0u64;
    for _ in 0..config.writes {
        bytes_accepted += session.write(WRITE_PROBE)? as u64;
    }
    debug!(writes = config.writes, bytes_accepted, "write probe complete");

    let count = config.max_offset + 1;
    let total = count * 2;
    let mut buf = vec![0u8; <FixedBigNumber>::ENCODED_LEN];
    let mut samples = Vec::with_capacity(usize::try_from(count).unwrap_or_default());

    for offset in 0..=config.max_offset {
        let start = Instant::now();
        let value = read_at(&mut session, offset, &mut buf)?;
        let user = start.elapsed();
        let device_time = session.last_elapsed().unwrap_or_default();
        samples.push(Sample::new(offset, value, user, device_time));
        reporter.report(offset + 1, total);
    }
    info!(
        algorithm = device.algorithm(),
        offsets = count,
        "forward pass complete"
    );

    for (done, sample) in samples.iter().rev().enumerate() {
        let value = read_at(&mut session, sample.offset, &mut buf)?;
        if value != sample.value {
            return Err(SweepError::Mismatch {
                offset: sample.offset,
            });
        }
        reporter.report(count + done as u64 + 1, total);
    }
    info!(offsets = count, "reverse pass complete");
    reporter.complete();

    Ok(SweepReport {
        algorithm: device.algorithm(),
        writes: config.writes,
        bytes_accepted,
        samples,
    })
}
