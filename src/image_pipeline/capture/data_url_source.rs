use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::capture::data_url::parse_data_url;
use crate::image_pipeline::capture::source::CaptureSource;
use crate::image_pipeline::capture::types::{CaptureConstraints, CapturedFrame, FacingMode};

const SOURCE_HINT: &str = "data-url";

/// Serves a browser-style screenshot handed over as a data URL.
pub struct DataUrlCaptureSource {
    data_url: String,
    facing_mode: Option<FacingMode>,
    max_bytes: Option<u64>,
}

impl DataUrlCaptureSource {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
            facing_mode: None,
            max_bytes: None,
        }
    }

    pub fn with_facing_mode(mut self, mode: FacingMode) -> Self {
        self.facing_mode = Some(mode);
        self
    }

    pub fn with_max_bytes(mut self, limit: u64) -> Self {
        self.max_bytes = Some(limit);
        self
    }
}

impl CaptureSource for DataUrlCaptureSource {
    fn capture(&mut self, constraints: &CaptureConstraints) -> Result<CapturedFrame> {
        constraints.note_substitution(self.facing_mode, SOURCE_HINT);

        let bytes = parse_data_url(&self.data_url, self.max_bytes)?;
        debug!(bytes = bytes.len(), "Captured still from data URL");

        Ok(CapturedFrame {
            bytes,
            facing_mode: self.facing_mode,
            source_hint: SOURCE_HINT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::AnalysisError;

    #[test]
    fn data_url_source_decodes_payload() {
        let mut source = DataUrlCaptureSource::new("data:image/jpeg;base64,aGVsbG8=")
            .with_facing_mode(FacingMode::Environment);

        let frame = source.capture(&CaptureConstraints::default()).unwrap();

        assert_eq!(frame.bytes, b"hello");
        assert_eq!(frame.source_hint, "data-url");
    }

    #[test]
    fn oversized_data_url_is_refused() {
        let mut source = DataUrlCaptureSource::new("data:image/jpeg;base64,aGVsbG8=").with_max_bytes(2);

        let result = source.capture(&CaptureConstraints::any_camera());

        assert!(matches!(result, Err(AnalysisError::InputTooLarge { .. })));
    }
}
