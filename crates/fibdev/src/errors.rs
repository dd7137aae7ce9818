//! Error handling and exit codes.

use fibdev_core::calculator::FibError;
use fibdev_core::constants::exit_codes;
use fibdev_device::DeviceError;
use fibdev_orchestration::SweepError;

/// Exit code for a calculation error.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for a device error.
pub fn handle_device_error(err: &DeviceError) -> i32 {
    match err {
        DeviceError::Busy => exit_codes::ERROR_BUSY,
    }
}

/// Exit code for a sweep error.
pub fn handle_sweep_error(err: &SweepError) -> i32 {
    match err {
        SweepError::Device(e) => handle_device_error(e),
        SweepError::OffsetOutOfRange { .. } => exit_codes::ERROR_CONFIG,
        SweepError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        SweepError::Io(_) | SweepError::Decode { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Map an application error to the process exit code.
///
/// The first typed error found in the context chain decides.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| {
            if let Some(e) = cause.downcast_ref::<FibError>() {
                Some(handle_error(e))
            } else if let Some(e) = cause.downcast_ref::<SweepError>() {
                Some(handle_sweep_error(e))
            } else {
                cause.downcast_ref::<DeviceError>().map(handle_device_error)
            }
        })
        .unwrap_or(exit_codes::ERROR_GENERIC);
    u8::try_from(code).unwrap_or(1)
}
