//! Preprocessing options and configuration.
//!
//! This module provides the [`PreprocessOptions`] struct controlling the
//! resize bound and the center-crop fraction applied before color analysis.

use crate::error::GradeError;

/// Default bound on the longer image side, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 1000;

/// Default fraction of each side kept by the center crop.
pub const DEFAULT_CROP_FRACTION: f64 = 0.6;

/// Configuration options for image preprocessing.
///
/// # Defaults
///
/// - Max dimension: 1000 px (longer side; images within bounds are untouched)
/// - Crop fraction: 0.6 (keep the central 60% of width and height)
///
/// # Example
///
/// ```
/// use matcha_grade::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .max_dimension(800)
///     .crop_fraction(0.5);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreprocessOptions {
    /// Bound on `max(width, height)` after resize. Must be positive.
    pub max_dimension: u32,

    /// Fraction of width and height kept by the center crop, in `(0, 1]`.
    pub crop_fraction: f64,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            crop_fraction: DEFAULT_CROP_FRACTION,
        }
    }
}

impl PreprocessOptions {
    /// Create preprocessing options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bound on the longer image side.
    #[inline]
    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Set the center-crop keep fraction.
    #[inline]
    pub fn crop_fraction(mut self, fraction: f64) -> Self {
        self.crop_fraction = fraction;
        self
    }

    /// Check every option against its valid domain.
    ///
    /// Returns [`GradeError::InvalidParameter`] naming the first bad option.
    pub fn validate(&self) -> Result<(), GradeError> {
        if self.max_dimension == 0 {
            return Err(GradeError::invalid("max_dimension", self.max_dimension));
        }
        validate_fraction(self.crop_fraction)
    }
}

pub(crate) fn validate_fraction(fraction: f64) -> Result<(), GradeError> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(GradeError::invalid("crop_fraction", fraction));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PreprocessOptions::default();
        assert_eq!(options.max_dimension, 1000);
        assert_eq!(options.crop_fraction, 0.6);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = PreprocessOptions::new().max_dimension(512).crop_fraction(1.0);
        assert_eq!(options.max_dimension, 512);
        assert_eq!(options.crop_fraction, 1.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_zero_max_dimension_rejected() {
        let err = PreprocessOptions::new().max_dimension(0).validate().unwrap_err();
        assert_eq!(
            err,
            GradeError::InvalidParameter {
                name: "max_dimension",
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn test_bad_fractions_rejected() {
        for fraction in [0.0, -0.2, 1.01, f64::NAN, f64::INFINITY] {
            let result = PreprocessOptions::new().crop_fraction(fraction).validate();
            assert!(result.is_err(), "fraction {} should be rejected", fraction);
        }
    }
}
