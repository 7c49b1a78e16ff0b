//! Error type for the grading pipeline.
//!
//! Only two things can go wrong: the input is not a readable image, or the
//! caller configured the pipeline with an out-of-domain value.

use std::fmt;

/// Unified error type for the matcha-grade public API.
///
/// [`GradeError::Decode`] is a data error and is normally folded into a
/// [`GradeOutcome`](crate::GradeOutcome) by [`grade_sample`](crate::grade_sample).
/// [`GradeError::InvalidParameter`] is a configuration error and should stop
/// the caller at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeError {
    /// The source could not be read or is not a recognizable image.
    Decode(String),
    /// A pipeline option is outside its valid domain.
    InvalidParameter {
        /// Option name, e.g. `"crop_fraction"`
        name: &'static str,
        /// Offending value, formatted for display
        value: String,
    },
}

impl GradeError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        GradeError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    /// Whether this error is a decode failure (recoverable per image).
    pub fn is_decode(&self) -> bool {
        matches!(self, GradeError::Decode(_))
    }
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeError::Decode(reason) => write!(f, "could not decode image: {}", reason),
            GradeError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {}: {}", name, value)
            }
        }
    }
}

impl std::error::Error for GradeError {}

impl From<image::ImageError> for GradeError {
    fn from(err: image::ImageError) -> Self {
        GradeError::Decode(err.to_string())
    }
}
