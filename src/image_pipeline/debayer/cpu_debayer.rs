use anyhow::{Result, bail};
use tracing::debug;
use std::io::Cursor;
use bayer::{BayerDepth, Demosaic, RasterDepth, RasterMut};

use crate::image_pipeline::debayer::types::RawSensorData;
use crate::image_pipeline::decode::types::ImageBuffer;

/// Display gamma applied after linear white balancing so that normalised
/// sensor values land where an 8-bit camera preview would put them.
const DISPLAY_GAMMA: f32 = 1.0 / 2.2;

pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }

    /// Demosaics the sensor mosaic and maps it to 8-bit RGBA.
    pub fn process(&self, raw: &RawSensorData) -> Result<ImageBuffer> {
        let width = raw.width;
        let height = raw.height;
        debug!("Starting CPU debayering for image {}x{}", width, height);

        if raw.data.len() != width * height {
            bail!(
                "sensor data holds {} samples, expected {}",
                raw.data.len(),
                width * height
            );
        }

        // bayer only demosaics 8 and 16 bit mosaics
        let (bayer_depth, raster_depth, bytes_per_sample) = if raw.bits_per_sample <= 8 {
            (BayerDepth::Depth8, RasterDepth::Depth8, 1)
        } else {
            (BayerDepth::Depth16LE, RasterDepth::Depth16, 2)
        };

        let bayer_bytes: Vec<u8> = if bytes_per_sample == 1 {
            raw.data.iter().map(|&val| val.min(u8::MAX as u16) as u8).collect()
        } else {
            raw.data.iter().flat_map(|&val| val.to_le_bytes()).collect()
        };

        let mut output_buf = vec![0u8; width * height * 3 * bytes_per_sample];
        {
            let mut cursor = Cursor::new(&bayer_bytes[..]);
            let mut output_raster = RasterMut::new(
                width,
                height,
                raster_depth,
                &mut output_buf,
            );

            debug!("Running demosaic with depth={:?}, CFA={:?}, algo=Linear", bayer_depth, raw.cfa);
            bayer::run_demosaic(
                &mut cursor,
                bayer_depth,
                raw.cfa.to_bayer(),
                Demosaic::Linear,
                &mut output_raster,
            ).map_err(|e| anyhow::anyhow!("Demosaic failed: {:?}", e))?;
        }

        let black_level = raw.black_level as f32;
        let range = (raw.white_level as f32 - black_level).max(1.0);
        let [wb_r, wb_g, wb_b] = normalized_white_balance(raw.wb_coeffs);

        let to_display = |sample: f32, gain: f32| -> u8 {
            let linear = ((sample - black_level).max(0.0) / range * gain).clamp(0.0, 1.0);
            (linear.powf(DISPLAY_GAMMA) * 255.0).round() as u8
        };

        let rgba: Vec<u8> = output_buf
            .chunks_exact(bytes_per_sample * 3)
            .flat_map(|px| {
                let [r, g, b] = if bytes_per_sample == 1 {
                    [px[0] as f32, px[1] as f32, px[2] as f32]
                } else {
                    [
                        u16::from_ne_bytes([px[0], px[1]]) as f32,
                        u16::from_ne_bytes([px[2], px[3]]) as f32,
                        u16::from_ne_bytes([px[4], px[5]]) as f32,
                    ]
                };
                [to_display(r, wb_r), to_display(g, wb_g), to_display(b, wb_b), u8::MAX]
            })
            .collect();

        ImageBuffer::new(width, height, rgba).map_err(anyhow::Error::from)
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scales white balance so green is 1.0. Missing or nonsensical
/// coefficients (NaN, zero, negative) fall back to neutral.
fn normalized_white_balance(coeffs: [f32; 3]) -> [f32; 3] {
    let valid = |c: f32| c.is_finite() && c > 0.0;
    if !coeffs.iter().all(|&c| valid(c)) {
        return [1.0, 1.0, 1.0];
    }
    let green = coeffs[1];
    [coeffs[0] / green, 1.0, coeffs[2] / green]
}
