//! Per-channel HSV means.

use crate::color::HsvImage;

/// Mean of each HSV channel over a region.
///
/// - `mean_hue`: degrees, `[0, 360)` (the half-scale mean doubled)
/// - `mean_saturation`: `[0, 255]`
/// - `mean_value`: `[0, 255]`
///
/// Hue is averaged arithmetically, not circularly: a region split between
/// 2 and 358 degrees averages to 180.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStats {
    pub mean_hue: f64,
    pub mean_saturation: f64,
    pub mean_value: f64,
}

impl ColorStats {
    /// Compute channel means. An empty image yields all zeros.
    pub fn from_hsv(image: &HsvImage) -> Self {
        let (mut hue, mut saturation, mut value) = (0u64, 0u64, 0u64);
        for p in &image.pixels {
            hue += p.hue as u64;
            saturation += p.saturation as u64;
            value += p.value as u64;
        }

        let count = image.len().max(1) as f64;
        Self {
            mean_hue: hue as f64 / count * 2.0,
            mean_saturation: saturation as f64 / count,
            mean_value: value as f64 / count,
        }
    }
}
