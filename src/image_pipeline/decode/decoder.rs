use crate::image_pipeline::analysis::types::AnalysisConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::decode::types::ImageBuffer;

/// Turns the bytes of one captured still into an RGBA [`ImageBuffer`].
///
/// Implementations read `config` on every call. When
/// `config.validate_dimensions` is set they must reject images outside the
/// configured bounds with
/// [`AnalysisError::InvalidDimensions`](crate::image_pipeline::AnalysisError::InvalidDimensions)
/// as soon as the dimensions are known, before allocating the full pixel
/// buffer. Empty or malformed input is a
/// [`AnalysisError::DecodeError`](crate::image_pipeline::AnalysisError::DecodeError).
pub trait ImageDecoder {
    fn decode(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer>;
}
