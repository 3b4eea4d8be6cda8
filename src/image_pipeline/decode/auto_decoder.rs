use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::analysis::types::{AnalysisConfig, InputFormat};
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::decode::decoder::ImageDecoder;
use crate::image_pipeline::decode::rawloader_decoder::RawLoaderDecoder;
use crate::image_pipeline::decode::standard_decoder::StandardImageDecoder;
use crate::image_pipeline::decode::types::ImageBuffer;

/// Picks a decoder per input according to [`AnalysisConfig::input_format`].
///
/// Most camera RAW containers are TIFF underneath, so in `Auto` mode
/// TIFF-looking and unrecognised data is offered to the RAW decoder first
/// and only then to the standard decoder.
#[derive(Default)]
pub struct AutoDecoder {
    standard: StandardImageDecoder,
    raw: RawLoaderDecoder,
}

impl AutoDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode_sniffed(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer> {
        match image::guess_format(data) {
            Ok(format) if format != ImageFormat::Tiff => {
                debug!("Detected {:?} input", format);
                self.standard.decode(data, config)
            }
            _ => match self.raw.decode(data, config) {
                Ok(buffer) => Ok(buffer),
                Err(raw_err) => {
                    debug!("Not a camera RAW file ({}), trying standard decoder", raw_err);
                    self.standard.decode(data, config)
                }
            },
        }
    }
}

impl ImageDecoder for AutoDecoder {
    fn decode(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer> {
        if data.is_empty() {
            return Err(AnalysisError::DecodeError("empty image data".to_string()));
        }

        match config.input_format {
            InputFormat::Encoded => self.standard.decode(data, config),
            InputFormat::CameraRaw => self.raw.decode(data, config),
            InputFormat::Auto => self.decode_sniffed(data, config),
        }
    }
}
