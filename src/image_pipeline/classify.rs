//! Pixel classification module
//!
//! Brightness-normalized RGB thresholding of a decoded image into
//! blue-dominant ("corrupted") and pink-dominant ("good") shares.

pub mod luminance;
mod pixel_classifier;
pub mod types;


pub use pixel_classifier::{PixelClassifier, classify, is_blue_dominant, is_pink_dominant};
pub use types::{ClassificationResult, PixelTally};
