//! matcha-grade: color-statistics quality grading for matcha samples
//!
//! Given a photo of matcha powder or a prepared drink, this crate estimates
//! a quality grade from the sample's average color.
//!
//! # Quick Start
//!
//! [`grade_sample`] is the single entry point most callers need:
//!
//! ```no_run
//! use std::path::Path;
//! use matcha_grade::{grade_sample, ImageSource};
//!
//! let outcome = grade_sample(ImageSource::Path(Path::new("upload.jpg")));
//! match outcome.grade {
//!     Some(grade) => println!("{}: {}", grade, outcome.tip),
//!     None => println!("{}", outcome.tip), // "Could not read image"
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. **Load** ([`loader`]) - decode to 8-bit RGB; failure is a normal outcome
//! 2. **Resize** ([`preprocess::resize_to_fit`]) - longer side at most 1000 px,
//!    triangle-filter downsampling, never upscales
//! 3. **Crop** ([`preprocess::center_crop`]) - keep the central 60% of each side
//! 4. **Analyze** ([`analysis::analyze_colors`]) - HSV means, then the
//!    [`grading`] rule table
//!
//! Stages share no state. [`GradingPipeline`] holds validated options and
//! can be used from many threads at once.
//!
//! # Errors
//!
//! [`GradeError::Decode`] never escapes [`grade_sample`]; it becomes
//! `GradeOutcome { grade: None, tip: "Could not read image" }`.
//! [`GradeError::InvalidParameter`] is returned by [`GradingPipeline::new`]
//! for configuration outside the valid domain.

pub mod analysis;
pub mod color;
mod error;
pub mod grading;
pub mod loader;
mod pipeline;
pub mod preprocess;


pub use analysis::{ColorAnalysis, ColorStats};
pub use error::GradeError;
pub use grading::{classify, Grade, GradeResult, GradingThresholds};
pub use pipeline::{
    grade_sample, Analysis, GradeOutcome, GradingPipeline, ImageSource, TOO_SMALL_TIP,
    UNREADABLE_TIP,
};
pub use preprocess::PreprocessOptions;
