//! Analysis configuration types

use tracing::warn;

use crate::image_pipeline::common::error::{AnalysisError, Result};

/// How input bytes should be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Sniff the container and pick a decoder
    #[default]
    Auto,
    /// JPEG, PNG, WebP and the other formats the `image` crate reads
    Encoded,
    /// Camera RAW sensor data (ARW, CR2, NEF, DNG, ...)
    CameraRaw,
}

/// Configuration for still-image analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Whether to reject zero-sized and oversized images before classifying
    pub validate_dimensions: bool,
    /// Largest width or height accepted when validating
    pub max_dimension: Option<usize>,
    /// Decoder selection
    pub input_format: InputFormat,
    /// Largest input accepted, in bytes, checked before decoding
    pub max_input_bytes: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(20_000),
            input_format: InputFormat::Auto,
            max_input_bytes: Some(64 * 1024 * 1024),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Rejects zero-sized images and images wider or taller than
    /// `max_dimension`. A no-op when `validate_dimensions` is off.
    ///
    /// Decoders call this on header dimensions before allocating pixels;
    /// the pipeline calls it again on the decoded buffer.
    pub fn check_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.max_dimension
            && (width > max || height > max)
        {
            warn!(
                "Image dimensions {}x{} exceed maximum {}",
                width, height, max
            );
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        Ok(())
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    input_format: Option<InputFormat>,
    max_input_bytes: Option<Option<u64>>,
}

impl AnalysisConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn input_format(mut self, format: InputFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    pub fn max_input_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            input_format: self.input_format.unwrap_or(default.input_format),
            max_input_bytes: self.max_input_bytes.unwrap_or(default.max_input_bytes),
        }
    }
}
