//! Debayering module for turning camera RAW sensor mosaics into RGBA buffers

pub mod cpu_debayer;
pub mod types;

pub use cpu_debayer::CpuDebayer;
pub use types::{CfaPattern, RawSensorData};
