//! Color space conversion.
//!
//! Images enter the analyzer as 8-bit sRGB ([`image::RgbImage`]) and are
//! converted to [`HsvImage`], which separates the chromatic angle from
//! colorfulness and brightness. The float conversion is done by `palette`;
//! this module only quantizes the result to bytes.

mod hsv;

pub use hsv::{HsvImage, HsvPixel, HUE_STEPS};
