//! Center crop.

use image::RgbImage;

use super::options::validate_fraction;
use crate::error::GradeError;

/// Crop region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Centered region keeping `floor(side * fraction)` of each side.
    pub fn centered(width: u32, height: u32, fraction: f64) -> Result<Self, GradeError> {
        validate_fraction(fraction)?;

        let cropped_w = (width as f64 * fraction).floor() as u32;
        let cropped_h = (height as f64 * fraction).floor() as u32;
        if cropped_w == 0 || cropped_h == 0 {
            return Err(GradeError::invalid(
                "crop_fraction",
                format!("{} leaves an empty crop of {}x{}", fraction, width, height),
            ));
        }

        Ok(Self {
            left: (width - cropped_w) / 2,
            top: (height - cropped_h) / 2,
            width: cropped_w,
            height: cropped_h,
        })
    }
}

/// Extract the centered sub-image keeping `fraction` of each side.
pub fn center_crop(image: &RgbImage, fraction: f64) -> Result<RgbImage, GradeError> {
    let region = CropRegion::centered(image.width(), image.height(), fraction)?;
    tracing::debug!(?region, "Center crop");

    Ok(image::imageops::crop_imm(image, region.left, region.top, region.width, region.height)
        .to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_region_default_fraction() {
        let region = CropRegion::centered(1000, 750, 0.6).unwrap();
        assert_eq!(
            region,
            CropRegion {
                left: 200,
                top: 150,
                width: 600,
                height: 450
            }
        );
    }

    #[test]
    fn test_region_floors_odd_sizes() {
        // 7 * 0.6 = 4.2 -> 4, (7 - 4) / 2 = 1
        // 5 * 0.6 = 3.0 -> 3, (5 - 3) / 2 = 1
        let region = CropRegion::centered(7, 5, 0.6).unwrap();
        assert_eq!((region.left, region.top, region.width, region.height), (1, 1, 4, 3));
    }

    #[test]
    fn test_full_fraction_keeps_everything() {
        let region = CropRegion::centered(13, 9, 1.0).unwrap();
        assert_eq!((region.left, region.top, region.width, region.height), (0, 0, 13, 9));
    }

    #[test]
    fn test_region_always_inside_bounds() {
        for (w, h) in [(1, 1), (2, 3), (999, 1000), (17, 4), (1000, 1)] {
            for fraction in [1.0, 0.99, 0.6, 0.5] {
                let Ok(region) = CropRegion::centered(w, h, fraction) else {
                    continue;
                };
                assert!(region.left + region.width <= w);
                assert!(region.top + region.height <= h);
                assert_eq!(region.width, (w as f64 * fraction).floor() as u32);
                assert_eq!(region.height, (h as f64 * fraction).floor() as u32);
            }
        }
    }

    #[test]
    fn test_empty_crop_is_invalid_parameter() {
        let err = CropRegion::centered(1, 1, 0.6).unwrap_err();
        assert!(matches!(
            err,
            GradeError::InvalidParameter {
                name: "crop_fraction",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        assert!(CropRegion::centered(100, 100, 0.0).is_err());
        assert!(CropRegion::centered(100, 100, 1.5).is_err());
    }

    #[test]
    fn test_center_crop_excludes_border() {
        // Green center surrounded by a white 10px border
        let image = RgbImage::from_fn(50, 50, |x, y| {
            if (10..40).contains(&x) && (10..40).contains(&y) {
                Rgb([30, 160, 50])
            } else {
                Rgb([255, 255, 255])
            }
        });

        let cropped = center_crop(&image, 0.6).unwrap();
        assert_eq!(cropped.dimensions(), (30, 30));
        assert!(cropped.pixels().all(|p| *p == Rgb([30, 160, 50])));
    }
}
