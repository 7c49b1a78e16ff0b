//! 8-bit HSV representation.
//!
//! Hue is stored half-scale so it fits a byte: `0..=179` covers 0-358
//! degrees and must be doubled to recover degrees. Saturation and value use
//! the full `0..=255` range.

use image::RgbImage;
use palette::{FromColor, Hsv, Srgb};

/// Largest stored hue; `HUE_STEPS` itself wraps back to 0.
pub const HUE_STEPS: u16 = 180;

/// One pixel in 8-bit HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvPixel {
    /// Half-scale hue, `0..=179`
    pub hue: u8,
    /// Saturation, `0..=255`
    pub saturation: u8,
    /// Value (max channel), `0..=255`
    pub value: u8,
}

impl HsvPixel {
    /// Convert one 8-bit sRGB sample.
    ///
    /// # Example
    /// ```
    /// use matcha_grade::color::HsvPixel;
    ///
    /// let green = HsvPixel::from_rgb([0, 255, 0]);
    /// assert_eq!(green.hue, 60);
    /// assert_eq!(green.hue_degrees(), 120);
    /// assert_eq!((green.saturation, green.value), (255, 255));
    /// ```
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        let hsv: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());

        let half = (hsv.hue.into_positive_degrees() / 2.0).round() as u16;
        Self {
            hue: (half % HUE_STEPS) as u8,
            saturation: unit_to_byte(hsv.saturation),
            value: unit_to_byte(hsv.value),
        }
    }

    /// Hue in whole degrees, `0..=358`.
    #[inline]
    pub fn hue_degrees(self) -> u16 {
        self.hue as u16 * 2
    }
}

#[inline]
fn unit_to_byte(x: f32) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}

/// An image converted to [`HsvPixel`]s, row-major.
#[derive(Debug, Clone)]
pub struct HsvImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<HsvPixel>,
}

impl HsvImage {
    /// Convert every pixel of an RGB image.
    pub fn from_rgb(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|p| HsvPixel::from_rgb(p.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
