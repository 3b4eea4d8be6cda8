//! Brightness measurement and normalization.

/// Mid-grey level the normalization pulls the average brightness to.
pub const TARGET_BRIGHTNESS: f64 = 128.0;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Perceived brightness of an RGB triple (ITU-R BT.601 weights).
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64
}

/// Mean brightness over RGBA pixels, `None` for an empty iterator.
pub fn average_brightness<'a, I>(pixels: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let (sum, count) = pixels
        .into_iter()
        .fold((0.0f64, 0usize), |(sum, count), px| {
            (sum + brightness(px[0], px[1], px[2]), count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Multiplier that maps `average` onto [`TARGET_BRIGHTNESS`]. Undefined for
/// a black (or non-finite) average.
pub fn normalization_factor(average: f64) -> Option<f64> {
    if average > 0.0 && average.is_finite() {
        Some(TARGET_BRIGHTNESS / average)
    } else {
        None
    }
}

#[inline]
pub fn normalize_channel(value: u8, factor: f64) -> f64 {
    (value as f64 * factor).clamp(0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_brightness_equals_level() {
        assert!((brightness(128, 128, 128) - 128.0).abs() < 1e-9);
    }

    #[test]
    fn empty_has_no_average() {
        let pixels: Vec<&[u8]> = Vec::new();
        assert_eq!(average_brightness(pixels), None);
    }

    #[test]
    fn black_has_no_factor() {
        assert_eq!(normalization_factor(0.0), None);
        assert_eq!(normalization_factor(f64::NAN), None);
        assert_eq!(normalization_factor(64.0), Some(2.0));
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(normalize_channel(200, 2.0), 255.0);
        assert_eq!(normalize_channel(100, 0.5), 50.0);
    }
}
