//! Image loading.
//!
//! Decodes any format the `image` crate recognizes and normalizes it to
//! 8-bit RGB. Alpha is dropped, grayscale is expanded.

use std::path::Path;

use image::RgbImage;

use crate::error::GradeError;

/// Decode an image from an in-memory buffer.
///
/// An empty buffer is a decode failure, not a panic.
pub fn load_from_bytes(bytes: &[u8]) -> Result<RgbImage, GradeError> {
    if bytes.is_empty() {
        return Err(GradeError::Decode("empty input".to_string()));
    }

    let decoded = image::load_from_memory(bytes)?;
    finish(decoded.to_rgb8())
}

/// Read and decode an image file.
///
/// I/O failures (missing file, permission denied) are reported as
/// [`GradeError::Decode`] so callers treat them like unreadable bytes.
pub fn load_from_path(path: &Path) -> Result<RgbImage, GradeError> {
    let bytes = std::fs::read(path)
        .map_err(|e| GradeError::Decode(format!("{}: {}", path.display(), e)))?;
    load_from_bytes(&bytes)
}

fn finish(image: RgbImage) -> Result<RgbImage, GradeError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(GradeError::Decode(format!(
            "image has no pixels ({}x{})",
            image.width(),
            image.height()
        )));
    }

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}
