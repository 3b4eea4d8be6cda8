//! Camera RAW decoder built on the rawloader library.
//!
//! Phones and cameras that can hand over sensor data (ARW, CR2, NEF, DNG,
//! RAF, ...) are decoded here, then demosaiced on the CPU into the same RGBA
//! buffer every other decoder produces.

use std::io::Cursor;

use tracing::debug;
use rawloader::RawImageData as RawloaderImageData;

use crate::image_pipeline::analysis::types::AnalysisConfig;
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::debayer::{CfaPattern, CpuDebayer, RawSensorData};
use crate::image_pipeline::decode::decoder::ImageDecoder;
use crate::image_pipeline::decode::types::ImageBuffer;

/// Default bit depth when no white level information is available from the RAW file.
const DEFAULT_BITS_PER_SAMPLE: u32 = 16;

const U16_BITS: u32 = 16;

pub struct RawLoaderDecoder {
    debayer: CpuDebayer,
}

impl RawLoaderDecoder {
    pub fn new() -> Self {
        Self { debayer: CpuDebayer::new() }
    }

    /// Reads the sensor mosaic and its levels without demosaicing.
    pub fn read_sensor(&self, data: &[u8]) -> Result<RawSensorData> {
        debug!("Decoding RAW image, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        if decoded.cpp != 1 {
            return Err(AnalysisError::UnsupportedFormat(format!(
                "RAW file with {} components per pixel",
                decoded.cpp
            )));
        }

        let cfa = CfaPattern::from_name(&decoded.cfa.name).ok_or_else(|| {
            AnalysisError::UnsupportedFormat(format!("CFA pattern {:?}", decoded.cfa.name))
        })?;

        let samples = samples_to_u16(decoded.data);
        let (white_level, bits_per_sample) = sensor_range(&decoded.whitelevels);

        debug!(
            "Decoded sensor: {}x{}, cfa={:?}, bits_per_sample={} (white level {})",
            decoded.width, decoded.height, cfa, bits_per_sample, white_level
        );

        Ok(RawSensorData {
            width: decoded.width,
            height: decoded.height,
            data: samples,
            bits_per_sample,
            black_level: decoded.blacklevels[0],
            white_level,
            wb_coeffs: [decoded.wb_coeffs[0], decoded.wb_coeffs[1], decoded.wb_coeffs[2]],
            cfa,
        })
    }
}

/// Integer samples pass through; float samples (normalised 0.0-1.0) are
/// scaled to the full u16 range.
fn samples_to_u16(data: RawloaderImageData) -> Vec<u16> {
    match data {
        RawloaderImageData::Integer(values) => values,
        RawloaderImageData::Float(values) => values
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * u16::MAX as f32) as u16)
            .collect(),
    }
}

/// White level and bit depth implied by the sensor's white levels.
/// A zero (missing) white level means a full 16-bit range.
fn sensor_range(whitelevels: &[u16]) -> (u16, u32) {
    match whitelevels.iter().max().copied() {
        Some(level) if level > 0 => (level, U16_BITS - level.leading_zeros()),
        _ => (u16::MAX, DEFAULT_BITS_PER_SAMPLE),
    }
}

impl Default for RawLoaderDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for RawLoaderDecoder {
    fn decode(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer> {
        let sensor = self.read_sensor(data)?;
        config.check_dimensions(sensor.width, sensor.height)?;
        self.debayer
            .process(&sensor)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_raw_data() {
        let result = RawLoaderDecoder::new().decode(&[0x5A; 256], &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }

    #[test]
    fn integer_samples_pass_through() {
        let samples = samples_to_u16(RawloaderImageData::Integer(vec![0, 1023, 4095]));
        assert_eq!(samples, vec![0, 1023, 4095]);
    }

    #[test]
    fn float_samples_scale_to_u16_range() {
        let samples = samples_to_u16(RawloaderImageData::Float(vec![-0.5, 0.0, 0.5, 1.0, 2.0]));
        assert_eq!(samples, vec![0, 0, 32767, 65535, 65535]);
    }

    #[test]
    fn bit_depth_follows_white_level() {
        assert_eq!(sensor_range(&[4095, 4095, 4095, 4095]), (4095, 12));
        assert_eq!(sensor_range(&[16383, 16000, 16383, 0]), (16383, 14));
    }

    #[test]
    fn missing_white_level_means_full_range() {
        assert_eq!(sensor_range(&[0, 0, 0, 0]), (u16::MAX, 16));
        assert_eq!(sensor_range(&[]), (u16::MAX, 16));
    }
}
