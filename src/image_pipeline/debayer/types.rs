//! Types for debayering operations

/// Colour filter array layout of a sensor, named by its top-left 2x2 tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfaPattern {
    Rggb,
    Bggr,
    Grbg,
    Gbrg,
}

impl CfaPattern {
    /// Parses a pattern name such as `"RGGB"`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "RGGB" => Some(Self::Rggb),
            "BGGR" => Some(Self::Bggr),
            "GRBG" => Some(Self::Grbg),
            "GBRG" => Some(Self::Gbrg),
            _ => None,
        }
    }

    pub(crate) fn to_bayer(self) -> bayer::CFA {
        match self {
            Self::Rggb => bayer::CFA::RGGB,
            Self::Bggr => bayer::CFA::BGGR,
            Self::Grbg => bayer::CFA::GRBG,
            Self::Gbrg => bayer::CFA::GBRG,
        }
    }
}

/// Single-channel sensor mosaic read from a camera RAW file.
#[derive(Debug, Clone)]
pub struct RawSensorData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw sensor samples, one per pixel
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor (e.g., 12, 14, or 16)
    pub bits_per_sample: u32,
    pub black_level: u16,
    pub white_level: u16,
    /// White balance multipliers for R, G, B
    pub wb_coeffs: [f32; 3],
    pub cfa: CfaPattern,
}
