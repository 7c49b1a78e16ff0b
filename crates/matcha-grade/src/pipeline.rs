//! The end-to-end grading pipeline.
//!
//! Loader -> resize -> center crop -> color analysis. Every call is
//! independent; a [`GradingPipeline`] holds only validated configuration
//! and can be shared across threads.

use std::path::Path;

use image::RgbImage;

use crate::analysis::{analyze_colors, ColorStats};
use crate::error::GradeError;
use crate::grading::{Grade, GradeResult, GradingThresholds};
use crate::loader::{load_from_bytes, load_from_path};
use crate::preprocess::{center_crop, resize_to_fit, PreprocessOptions};

/// Tip returned when the input cannot be decoded.
pub const UNREADABLE_TIP: &str = "Could not read image";

/// Tip returned when the decoded image has too few pixels to crop.
pub const TOO_SMALL_TIP: &str = "Image too small to analyze";

/// Where the sample image comes from.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl ImageSource<'_> {
    fn load(self) -> Result<RgbImage, GradeError> {
        match self {
            ImageSource::Path(path) => load_from_path(path),
            ImageSource::Bytes(bytes) => load_from_bytes(bytes),
        }
    }
}

/// Caller-facing result of grading one sample.
///
/// `grade` is `None` when the image could not be graded. `tip` then carries
/// [`UNREADABLE_TIP`] for undecodable input, or [`TOO_SMALL_TIP`] for an image
/// that decodes but leaves an empty center crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOutcome {
    pub grade: Option<Grade>,
    pub tip: &'static str,
}

impl GradeOutcome {
    pub fn unreadable() -> Self {
        Self {
            grade: None,
            tip: UNREADABLE_TIP,
        }
    }

    pub fn too_small() -> Self {
        Self {
            grade: None,
            tip: TOO_SMALL_TIP,
        }
    }
}

impl From<GradeResult> for GradeOutcome {
    fn from(result: GradeResult) -> Self {
        Self {
            grade: Some(result.grade),
            tip: result.tip,
        }
    }
}

/// Full diagnostic record of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Decoded size
    pub source_dimensions: (u32, u32),
    /// Size after the bounded resize
    pub resized_dimensions: (u32, u32),
    /// Size of the analyzed center crop
    pub crop_dimensions: (u32, u32),
    pub stats: ColorStats,
    pub result: GradeResult,
}

/// Configured grading pipeline.
///
/// # Example
///
/// ```
/// use matcha_grade::{GradingPipeline, ImageSource, PreprocessOptions, UNREADABLE_TIP};
///
/// let pipeline = GradingPipeline::new(PreprocessOptions::default()).unwrap();
/// let outcome = pipeline.grade(ImageSource::Bytes(b"not an image"));
/// assert_eq!(outcome.grade, None);
/// assert_eq!(outcome.tip, UNREADABLE_TIP);
/// ```
#[derive(Debug, Clone)]
pub struct GradingPipeline {
    options: PreprocessOptions,
    thresholds: GradingThresholds,
}

impl Default for GradingPipeline {
    fn default() -> Self {
        Self {
            options: PreprocessOptions::default(),
            thresholds: GradingThresholds::default(),
        }
    }
}

impl GradingPipeline {
    /// Build a pipeline, rejecting out-of-domain options up front.
    pub fn new(options: PreprocessOptions) -> Result<Self, GradeError> {
        options.validate()?;
        Ok(Self {
            options,
            thresholds: GradingThresholds::default(),
        })
    }

    /// Replace the grading rule table.
    pub fn with_thresholds(mut self, thresholds: GradingThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    pub fn thresholds(&self) -> &GradingThresholds {
        &self.thresholds
    }

    /// Run every stage and report intermediate dimensions and stats.
    pub fn analyze(&self, source: ImageSource<'_>) -> Result<Analysis, GradeError> {
        let image = source.load()?;
        self.analyze_image(&image)
    }

    /// Run resize, crop and color analysis on an already decoded image.
    pub fn analyze_image(&self, image: &RgbImage) -> Result<Analysis, GradeError> {
        let resized = resize_to_fit(image, self.options.max_dimension);
        let crop = center_crop(&resized, self.options.crop_fraction)?;
        let colors = analyze_colors(&crop, &self.thresholds);

        Ok(Analysis {
            source_dimensions: image.dimensions(),
            resized_dimensions: resized.dimensions(),
            crop_dimensions: crop.dimensions(),
            stats: colors.stats,
            result: colors.result,
        })
    }

    /// Grade one sample. Never fails: unreadable input becomes
    /// [`GradeOutcome::unreadable`], an image too small to crop becomes
    /// [`GradeOutcome::too_small`].
    pub fn grade(&self, source: ImageSource<'_>) -> GradeOutcome {
        match self.analyze(source) {
            Ok(analysis) => analysis.result.into(),
            Err(GradeError::Decode(reason)) => {
                tracing::debug!(%reason, "Image could not be decoded");
                GradeOutcome::unreadable()
            }
            Err(e) => {
                // Options are validated in new(); only the crop of a tiny image fails here.
                tracing::warn!(%e, "Image too small to analyze");
                GradeOutcome::too_small()
            }
        }
    }
}

/// Grade one sample with the default pipeline.
///
/// ```
/// use std::io::Cursor;
/// use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
/// use matcha_grade::{grade_sample, Grade, ImageSource};
///
/// let sample = RgbImage::from_pixel(64, 64, Rgb([40, 180, 60]));
/// let mut png = Cursor::new(Vec::new());
/// DynamicImage::ImageRgb8(sample).write_to(&mut png, ImageFormat::Png).unwrap();
///
/// let outcome = grade_sample(ImageSource::Bytes(png.get_ref().as_slice()));
/// assert_eq!(outcome.grade, Some(Grade::Ceremonial));
/// ```
pub fn grade_sample(source: ImageSource<'_>) -> GradeOutcome {
    GradingPipeline::default().grade(source)
}
