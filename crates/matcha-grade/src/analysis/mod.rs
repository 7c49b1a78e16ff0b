//! Color analysis of a cropped sample: HSV conversion, channel means,
//! grade assignment.

mod stats;

use image::RgbImage;

use crate::color::HsvImage;
use crate::grading::{classify, GradeResult, GradingThresholds};

pub use stats::ColorStats;

/// Stats and grade for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalysis {
    pub stats: ColorStats,
    pub result: GradeResult,
}

/// Convert `crop` to HSV, average each channel and grade the means.
pub fn analyze_colors(crop: &RgbImage, thresholds: &GradingThresholds) -> ColorAnalysis {
    let hsv = HsvImage::from_rgb(crop);
    let stats = ColorStats::from_hsv(&hsv);
    let result = classify(&stats, thresholds);

    tracing::debug!(
        mean_hue = stats.mean_hue,
        mean_saturation = stats.mean_saturation,
        mean_value = stats.mean_value,
        grade = %result.grade,
        "Color analysis complete"
    );

    ColorAnalysis { stats, result }
}
