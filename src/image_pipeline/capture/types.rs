//! Capture request and result types

use tracing::debug;

/// Which physical camera a capture prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    /// Rear-facing camera, pointed away from the user
    Environment,
    /// Front-facing camera
    User,
}

/// Constraints passed to a capture source. Sources treat them as
/// preferences and may substitute whatever camera is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing_mode: Option<FacingMode>,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            facing_mode: Some(FacingMode::Environment),
        }
    }
}

impl CaptureConstraints {
    pub fn facing(mode: FacingMode) -> Self {
        Self { facing_mode: Some(mode) }
    }

    pub fn any_camera() -> Self {
        Self { facing_mode: None }
    }

    /// Logs when a source used a different camera than the one requested.
    pub(crate) fn note_substitution(&self, actual: Option<FacingMode>, source: &str) {
        if let Some(requested) = self.facing_mode
            && let Some(actual) = actual
            && requested != actual
        {
            debug!(?requested, ?actual, source, "Requested camera unavailable, using substitute");
        }
    }
}

/// An encoded still handed over by a capture source.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub bytes: Vec<u8>,
    /// Camera actually used, when the source knows it
    pub facing_mode: Option<FacingMode>,
    /// Short description of where the frame came from, for logs
    pub source_hint: String,
}
