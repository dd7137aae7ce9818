//! # fibdev-device
//!
//! A character-device style wrapper around a Fibonacci calculator: one
//! exclusive session at a time, `seek` selects the index, `read` returns the
//! fixed-width value, writes are ignored.

pub mod device;
pub mod error;

pub use device::{FibDevice, Session};
pub use error::DeviceError;
