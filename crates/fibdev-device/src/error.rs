//! Device errors.

/// Errors returned when opening a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Another session already holds the device.
    #[error("device busy: another session is open")]
    Busy,
}
