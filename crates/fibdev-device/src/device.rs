//! File-like access to a calculator.
//!
//! A `FibDevice` hands out at most one `Session` at a time. The session's
//! position is the Fibonacci index; reading encodes F(position) as
//! `FixedBigNumber::ENCODED_LEN` bytes of little-endian limbs.

use std::io::{self, Read, Seek, SeekFrom, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use fibdev_core::calculator::{Calculator, Measurement};
use fibdev_core::constants::MAX_LENGTH;
use fibdev_core::FixedBigNumber;

use crate::error::DeviceError;

/// Exclusive-access front for a calculator.
pub struct FibDevice {
    calculator: Arc<dyn Calculator>,
    in_use: Arc<AtomicBool>,
}

impl FibDevice {
    /// Create a device serving values from `calculator`.
    #[must_use]
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self {
            calculator,
            in_use: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Open a session, failing with [`DeviceError::Busy`] if one is already open.
    pub fn open(&self) -> Result<Session, DeviceError> {
        if self
            .in_use
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            warn!("fibdev is in use");
            return Err(DeviceError::Busy);
        }
        debug!(algorithm = self.calculator.name(), "session opened");
        Ok(Session {
            calculator: Arc::clone(&self.calculator),
            in_use: Arc::clone(&self.in_use),
            pos: 0,
            last_elapsed: None,
        })
    }

    /// Whether a session currently holds the device.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.in_use.load(Ordering::Acquire)
    }

    /// Name of the calculator behind this device.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.calculator.name()
    }

    /// Largest index a session can seek to.
    #[must_use]
    pub fn max_length(&self) -> u64 {
        MAX_LENGTH
    }
}

/// An open handle on a [`FibDevice`]. Dropping it releases the device.
pub struct Session {
    calculator: Arc<dyn Calculator>,
    in_use: Arc<AtomicBool>,
    pos: u64,
    last_elapsed: Option<Duration>,
}

impl Session {
    /// Current index.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Time spent computing the most recent read on this session.
    #[must_use]
    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed
    }

    /// Compute F(position) without going through a byte buffer.
    pub fn read_value(&mut self) -> Measurement {
        let measurement = self.calculator.measure(self.pos);
        self.last_elapsed = Some(measurement.elapsed);
        debug!(
            index = self.pos,
            elapsed_ns = measurement.elapsed.as_nanos(),
            "computed"
        );
        measurement
    }
}

impl Read for Session {
    /// Fill `buf` with the encoded F(position).
    ///
    /// Buffers shorter than one encoded value get nothing and `Ok(0)`. The
    /// position does not advance.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.len() < <FixedBigNumber>::ENCODED_LEN {
            debug!(len = buf.len(), "read buffer too small");
            return Ok(0);
        }
        let measurement = self.read_value();
        Ok(measurement.value.encode_into(buf).unwrap_or(0))
    }
}

impl Write for Session {
    /// Writes are discarded; a non-empty write reports one byte taken.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(usize::from(!buf.is_empty()))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for Session {
    /// Move to a new index, clamped to `[0, MAX_LENGTH]`.
    ///
    /// `SeekFrom::End(d)` lands on `MAX_LENGTH - d`.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let max = i128::from(MAX_LENGTH);
        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::Current(delta) => i128::from(self.pos) + i128::from(delta),
            SeekFrom::End(delta) => max - i128::from(delta),
        };
        // Clamped to [0, MAX_LENGTH], so the conversion cannot fail.
        self.pos = u64::try_from(target.clamp(0, max)).unwrap_or(MAX_LENGTH);
        Ok(self.pos)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.in_use.store(false, Ordering::Release);
        debug!("session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdev_core::fastdoubling::FastDoubling;

    const LEN: usize = FixedBigNumber::<8>::ENCODED_LEN;

    fn device() -> FibDevice {
        FibDevice::new(Arc::new(FastDoubling::new()))
    }

    #[test]
    fn second_open_is_busy() {
        let dev = device();
        let session = dev.open().unwrap();
        assert!(dev.is_open());
        assert!(matches!(dev.open(), Err(DeviceError::Busy)));
        drop(session);
        assert!(!dev.is_open());
        assert!(dev.open().is_ok());
    }

    #[test]
    fn read_encodes_value_at_position() {
        let dev = device();
        let mut session = dev.open().unwrap();
        session.seek(SeekFrom::Start(92)).unwrap();
        let mut buf = [0u8; LEN];
        assert_eq!(session.read(&mut buf).unwrap(), LEN);
        let value = FixedBigNumber::<8>::decode(&buf).unwrap();
        assert_eq!(value.to_string(), "7540113804746346429");
        assert_eq!(session.position(), 92);
        assert!(session.last_elapsed().is_some());
    }

    #[test]
    fn short_buffer_reads_nothing() {
        let dev = device();
        let mut session = dev.open().unwrap();
        let mut buf = [0xFFu8; LEN - 1];
        assert_eq!(session.read(&mut buf).unwrap(), 0);
        assert!(buf.iter().all(|&b| b == 0xFF));
        assert!(session.last_elapsed().is_none());
    }

    #[test]
    fn seek_clamps_to_range() {
        let dev = device();
        let mut session = dev.open().unwrap();
        assert_eq!(session.seek(SeekFrom::Start(500)).unwrap(), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::Current(-1000)).unwrap(), 0);
        assert_eq!(session.seek(SeekFrom::Current(7)).unwrap(), 7);
        assert_eq!(session.seek(SeekFrom::Current(3)).unwrap(), 10);
    }

    #[test]
    fn seek_from_end_subtracts() {
        let dev = device();
        let mut session = dev.open().unwrap();
        assert_eq!(session.seek(SeekFrom::End(10)).unwrap(), MAX_LENGTH - 10);
        assert_eq!(session.seek(SeekFrom::End(-5)).unwrap(), MAX_LENGTH);
        assert_eq!(session.seek(SeekFrom::End(200)).unwrap(), 0);
    }

    #[test]
    fn write_is_discarded() {
        let dev = device();
        let mut session = dev.open().unwrap();
        assert_eq!(session.write(b"testing writing").unwrap(), 1);
        assert_eq!(session.write(b"").unwrap(), 0);
        assert!(session.flush().is_ok());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn read_value_records_elapsed() {
        let dev = device();
        let mut session = dev.open().unwrap();
        session.seek(SeekFrom::Start(10)).unwrap();
        let m = session.read_value();
        assert_eq!(m.value.to_string(), "55");
        assert_eq!(session.last_elapsed(), Some(m.elapsed));
    }

    #[test]
    fn sessions_from_separate_devices_are_independent() {
        let a = device();
        let b = device();
        let _sa = a.open().unwrap();
        assert!(b.open().is_ok());
    }
}
