//! Decoder for ordinary encoded stills (JPEG, PNG, WebP, BMP, TIFF, ...)
//! backed by the `image` crate.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use crate::image_pipeline::analysis::types::AnalysisConfig;
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::decode::decoder::ImageDecoder;
use crate::image_pipeline::decode::types::ImageBuffer;

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardImageDecoder;

impl StandardImageDecoder {
    fn reader(data: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))
    }

    /// Reads width and height from the image header only.
    pub fn inspect_dimensions(data: &[u8]) -> Result<(u32, u32)> {
        Self::reader(data)?
            .into_dimensions()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))
    }
}

impl ImageDecoder for StandardImageDecoder {
    fn decode(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer> {
        if data.is_empty() {
            return Err(AnalysisError::DecodeError("empty image data".to_string()));
        }

        debug!("Decoding encoded image, {} bytes", data.len());

        let (header_width, header_height) = Self::inspect_dimensions(data)?;
        config.check_dimensions(header_width as usize, header_height as usize)?;

        let decoded = Self::reader(data)?
            .decode()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        ImageBuffer::new(width as usize, height as usize, rgba.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    /// PNG whose header claims `width`x`height` but whose pixel data is cut
    /// off, so only a header read can succeed.
    fn truncated_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::GrayImage::new(width, height);
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        let mut bytes = bytes.into_inner();
        let idat = bytes
            .windows(4)
            .position(|w| w == b"IDAT")
            .unwrap();
        // Keep the IDAT length and tag, drop the compressed payload
        bytes.truncate(idat + 4);
        bytes
    }

    #[test]
    fn decodes_png_to_rgba() {
        let png = encode_png(3, 2, [255, 105, 180, 255]);

        let buffer = StandardImageDecoder.decode(&png, &AnalysisConfig::default()).unwrap();

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert!(buffer.pixels().all(|px| px == [255, 105, 180, 255]));
    }

    #[test]
    fn oversized_png_rejected_before_decoding() {
        let png = truncated_png(30_000, 2);
        let config = AnalysisConfig::builder().max_dimension(Some(5)).build();

        assert_eq!(StandardImageDecoder::inspect_dimensions(&png).unwrap(), (30_000, 2));

        let result = StandardImageDecoder.decode(&png, &config);

        assert!(matches!(result, Err(AnalysisError::InvalidDimensions(30_000, 2))));
    }

    #[test]
    fn truncated_png_within_limits_fails_to_decode() {
        let png = truncated_png(4, 2);

        let result = StandardImageDecoder.decode(&png, &AnalysisConfig::default());

        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }

    #[test]
    fn oversized_png_accepted_without_validation() {
        let png = encode_png(30, 2, [0, 0, 255, 255]);
        let config = AnalysisConfig::builder()
            .validate_dimensions(false)
            .max_dimension(Some(5))
            .build();

        let buffer = StandardImageDecoder.decode(&png, &config).unwrap();

        assert_eq!(buffer.width(), 30);
    }

    #[test]
    fn rejects_empty_input() {
        let result = StandardImageDecoder.decode(&[], &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }

    #[test]
    fn rejects_garbage() {
        let result = StandardImageDecoder.decode(b"definitely not an image", &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }
}
