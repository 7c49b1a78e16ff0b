//! Bounded downscaling.
//!
//! Resampling is done by `image::imageops::resize` with a triangle filter,
//! whose support widens with the scale factor so every source pixel
//! contributes to the output.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Filter used for downscaling.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Shrink `image` so its longer side is at most `max_dimension`.
///
/// Returns the input borrowed when it already fits. Otherwise both sides
/// are scaled by `max_dimension / max(width, height)` and rounded to the
/// nearest pixel independently. Never upscales.
///
/// `max_dimension` must be positive; callers validate it through
/// [`PreprocessOptions::validate`](crate::PreprocessOptions::validate).
pub fn resize_to_fit(image: &RgbImage, max_dimension: u32) -> Cow<'_, RgbImage> {
    let (width, height) = image.dimensions();
    let longest = width.max(height);

    if longest <= max_dimension {
        return Cow::Borrowed(image);
    }

    let (new_width, new_height) = fitted_dimensions(width, height, max_dimension);
    tracing::debug!(
        from_width = width,
        from_height = height,
        to_width = new_width,
        to_height = new_height,
        "Resizing image"
    );

    Cow::Owned(imageops::resize(image, new_width, new_height, RESIZE_FILTER))
}

/// Target dimensions for an image larger than `max_dimension`.
pub(crate) fn fitted_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let scale = max_dimension as f64 / width.max(height) as f64;
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, side);
    (scaled(width), scaled(height))
}
