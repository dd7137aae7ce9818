//! fibdev library: application logic for the fixed-width Fibonacci tool.

pub mod app;
pub mod config;
pub mod errors;
