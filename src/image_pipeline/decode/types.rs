//! Decoded image types

use crate::image_pipeline::common::error::{AnalysisError, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A decoded still image: `width * height` pixels stored as interleaved
/// RGBA bytes.
///
/// The buffer cannot be modified once built; classification only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Wraps interleaved RGBA bytes, checking that the length matches the
    /// dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(AnalysisError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(AnalysisError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    /// Builds a buffer where every pixel has the same RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        let pixels = width
            .checked_mul(height)
            .ok_or(AnalysisError::InvalidDimensions(width, height))?;
        Self::new(width, height, rgba.repeat(pixels))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Raw interleaved RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterates over pixels as `[r, g, b, a]` slices in row-major order.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }
}
