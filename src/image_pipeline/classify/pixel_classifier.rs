use tracing::debug;

use crate::image_pipeline::classify::luminance::{average_brightness, normalization_factor, normalize_channel};
use crate::image_pipeline::classify::types::{ClassificationResult, PixelTally};
use crate::image_pipeline::decode::types::ImageBuffer;

/// Counts blue-dominant and pink-dominant pixels after normalizing the
/// buffer's average brightness to mid-grey.
///
/// Stateless; classifying the same buffer always gives the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelClassifier;

impl PixelClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, buffer: &ImageBuffer) -> ClassificationResult {
        self.tally(buffer).to_result()
    }

    /// Runs both passes and returns the raw counts.
    ///
    /// An empty buffer, or one whose average brightness is zero, has no
    /// normalization factor; nothing is counted and both shares come out as 0.
    pub fn tally(&self, buffer: &ImageBuffer) -> PixelTally {
        let pixels = buffer.pixel_count();
        let average = average_brightness(buffer.pixels()).unwrap_or(0.0);

        let Some(factor) = normalization_factor(average) else {
            debug!(pixels, average, "No normalization factor, reporting zero shares");
            return PixelTally {
                pixels,
                average_brightness: average,
                ..PixelTally::default()
            };
        };

        let (blue, pink) = buffer.pixels().fold((0usize, 0usize), |(blue, pink), px| {
            let r = normalize_channel(px[0], factor);
            let g = normalize_channel(px[1], factor);
            let b = normalize_channel(px[2], factor);
            (
                blue + is_blue_dominant(r, g, b) as usize,
                pink + is_pink_dominant(r, g, b) as usize,
            )
        });

        debug!(pixels, blue, pink, average, factor, "Classified pixels");

        PixelTally {
            pixels,
            blue,
            pink,
            average_brightness: average,
            factor: Some(factor),
        }
    }
}

/// Free-function form of [`PixelClassifier::classify`].
pub fn classify(buffer: &ImageBuffer) -> ClassificationResult {
    PixelClassifier.classify(buffer)
}

#[inline]
pub fn is_blue_dominant(r: f64, g: f64, b: f64) -> bool {
    b > 128.0 && b > r && b > g
}

#[inline]
pub fn is_pink_dominant(r: f64, g: f64, b: f64) -> bool {
    r > 150.0 && g > 50.0 && b > 100.0 && r > g && r > b
}
