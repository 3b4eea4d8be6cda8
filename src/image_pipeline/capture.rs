//! Still capture module
//!
//! The camera side of an analysis: something that hands over one encoded
//! still, preferably from the rear camera.

mod source;
mod file_source;
mod data_url_source;
pub mod data_url;
pub mod types;

pub use source::CaptureSource;
pub use file_source::FileCaptureSource;
pub use data_url_source::DataUrlCaptureSource;
pub use data_url::parse_data_url;
pub use types::{CaptureConstraints, CapturedFrame, FacingMode};
