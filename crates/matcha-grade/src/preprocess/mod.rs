//! Image preprocessing ahead of color analysis.
//!
//! Two steps, in order:
//!
//! 1. **Resize** - bound the longer side to [`PreprocessOptions::max_dimension`]
//!    with a triangle-filter downscale. Images already within bounds pass through unchanged.
//! 2. **Center crop** - keep the central [`PreprocessOptions::crop_fraction`] of
//!    each side so that the background and container edges around the sample
//!    do not skew the color means.
//!
//! # Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use matcha_grade::preprocess::{center_crop, resize_to_fit};
//!
//! let photo = RgbImage::from_pixel(2000, 1000, Rgb([40, 150, 60]));
//! let resized = resize_to_fit(&photo, 1000);
//! assert_eq!(resized.dimensions(), (1000, 500));
//!
//! let crop = center_crop(&resized, 0.6).unwrap();
//! assert_eq!(crop.dimensions(), (600, 300));
//! ```

mod crop;
mod options;
mod resize;

pub use crop::{center_crop, CropRegion};
pub use options::{PreprocessOptions, DEFAULT_CROP_FRACTION, DEFAULT_MAX_DIMENSION};
pub use resize::resize_to_fit;
