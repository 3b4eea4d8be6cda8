use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::capture::types::{CaptureConstraints, CapturedFrame};

/// Something that can hand over one encoded still on demand.
///
/// `constraints` are preferences, not requirements: a source without the
/// requested camera uses whatever it has and reports the camera it actually
/// used in [`CapturedFrame::facing_mode`] (or `None` when unknown). The
/// returned bytes are the encoded image as produced by the camera and are
/// not validated here; decoding happens later in the pipeline.
///
/// Failing to obtain a frame at all (camera unavailable, permission denied,
/// unreadable file, oversized payload) is reported as an error, typically
/// [`AnalysisError::CaptureError`](crate::image_pipeline::AnalysisError::CaptureError).
pub trait CaptureSource {
    fn capture(&mut self, constraints: &CaptureConstraints) -> Result<CapturedFrame>;
}
