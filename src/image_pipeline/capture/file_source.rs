use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::capture::source::CaptureSource;
use crate::image_pipeline::capture::types::{CaptureConstraints, CapturedFrame, FacingMode};

/// Serves a still image that was already written to disk by a camera.
pub struct FileCaptureSource {
    path: PathBuf,
    facing_mode: Option<FacingMode>,
    max_bytes: Option<u64>,
}

impl FileCaptureSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            facing_mode: None,
            max_bytes: None,
        }
    }

    /// Records which camera took the file.
    pub fn with_facing_mode(mut self, mode: FacingMode) -> Self {
        self.facing_mode = Some(mode);
        self
    }

    /// Refuses files larger than `limit` bytes without reading them.
    pub fn with_max_bytes(mut self, limit: u64) -> Self {
        self.max_bytes = Some(limit);
        self
    }

    fn capture_error(&self, e: std::io::Error) -> AnalysisError {
        AnalysisError::CaptureError(format!("{}: {}", self.path.display(), e))
    }
}

impl CaptureSource for FileCaptureSource {
    fn capture(&mut self, constraints: &CaptureConstraints) -> Result<CapturedFrame> {
        let source_hint = self.path.display().to_string();
        constraints.note_substitution(self.facing_mode, &source_hint);

        if let Some(limit) = self.max_bytes {
            let size = std::fs::metadata(&self.path)
                .map_err(|e| self.capture_error(e))?
                .len();
            if size > limit {
                warn!(source = %source_hint, "Still of {} bytes exceeds limit of {}", size, limit);
                return Err(AnalysisError::InputTooLarge { size, limit });
            }
        }

        let bytes = std::fs::read(&self.path).map_err(|e| self.capture_error(e))?;

        info!(source = %source_hint, bytes = bytes.len(), "Captured still from file");

        Ok(CapturedFrame {
            bytes,
            facing_mode: self.facing_mode,
            source_hint,
        })
    }
}
