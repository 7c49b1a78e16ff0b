//! Test fixtures: synthetic sample photos and form parts.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Sample colors with known grades
pub mod colors {
    use image::Rgb;

    /// Hue ~128 deg, S ~198, V 180
    pub const CEREMONIAL: Rgb<u8> = Rgb([40, 180, 60]);

    /// Hue ~84 deg, S ~201, V 190
    pub const CULINARY: Rgb<u8> = Rgb([130, 190, 40]);

    /// Hue ~33 deg
    pub const BROWN: Rgb<u8> = Rgb([140, 100, 50]);

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
}

/// Encode a uniform image as PNG
pub fn solid_png(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    encode(RgbImage::from_pixel(width, height, color), ImageFormat::Png)
}

/// Encode a uniform image as JPEG
pub fn solid_jpeg(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    encode(RgbImage::from_pixel(width, height, color), ImageFormat::Jpeg)
}

/// A sample in a cup: `color` in the middle, `frame` around the outer fifth
pub fn cup_png(width: u32, height: u32, color: Rgb<u8>, frame: Rgb<u8>) -> Vec<u8> {
    let (bx, by) = (width / 5, height / 5);
    let image = RgbImage::from_fn(width, height, |x, y| {
        if x >= bx && x < width - bx && y >= by && y < height - by {
            color
        } else {
            frame
        }
    });
    encode(image, ImageFormat::Png)
}

fn encode(image: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, format)
        .expect("Failed to encode test image");
    buffer.into_inner()
}

/// One part of a multipart/form-data body
pub struct MultipartPart {
    pub name: String,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

impl MultipartPart {
    /// A file input part
    pub fn file(name: &str, file_name: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            data,
        }
    }

    /// A plain text field
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            data: value.as_bytes().to_vec(),
        }
    }
}
