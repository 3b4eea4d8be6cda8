//! Classification result types

use std::fmt;

/// Share of blue-dominant ("corrupted") and pink-dominant ("good") pixels,
/// as percentages rounded to two decimals.
///
/// The two shares are counted independently; they need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassificationResult {
    pub blue_share: f64,
    pub pink_share: f64,
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Corrupted: {:.2}%", self.blue_share)?;
        write!(f, "Good: {:.2}%", self.pink_share)
    }
}

/// Raw counts behind a [`ClassificationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelTally {
    pub pixels: usize,
    pub blue: usize,
    pub pink: usize,
    pub average_brightness: f64,
    /// Brightness normalization factor, `None` when the buffer is empty or black.
    pub factor: Option<f64>,
}

impl PixelTally {
    pub fn to_result(&self) -> ClassificationResult {
        ClassificationResult {
            blue_share: share(self.blue, self.pixels),
            pink_share: share(self.pink, self.pixels),
        }
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_hundredths(count as f64 / total as f64 * 100.0)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
