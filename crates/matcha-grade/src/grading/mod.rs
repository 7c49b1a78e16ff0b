//! Grade assignment from mean HSV statistics.
//!
//! The rule table is evaluated in fixed priority order, first match wins:
//!
//! | Grade            | Hue (degrees)              | Saturation | Value |
//! |------------------|----------------------------|------------|-------|
//! | `Ceremonial`     | `[90, 140]`                | `>= 100`   | `>= 60` |
//! | `CulinaryMedium` | `[70, 90)` or `(140, 160]` | `>= 70`    | any   |
//! | `LowGradeOld`    | everything else            |            |       |

pub mod thresholds;

use std::fmt;

use crate::analysis::ColorStats;
pub use thresholds::{GradingThresholds, HueRange};

/// Quality grade of a matcha sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Ceremonial,
    CulinaryMedium,
    LowGradeOld,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Ceremonial, Grade::CulinaryMedium, Grade::LowGradeOld];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Grade::Ceremonial => "Ceremonial",
            Grade::CulinaryMedium => "Culinary/Medium",
            Grade::LowGradeOld => "Low Grade/Old",
        }
    }

    /// Stable snake_case identifier for machine output.
    pub fn key(self) -> &'static str {
        match self {
            Grade::Ceremonial => "ceremonial",
            Grade::CulinaryMedium => "culinary_medium",
            Grade::LowGradeOld => "low_grade_old",
        }
    }

    /// Advice shown alongside the grade.
    pub fn tip(self) -> &'static str {
        match self {
            Grade::Ceremonial => "Bright, vibrant green. Likely fresh, high-quality matcha.",
            Grade::CulinaryMedium => {
                "Green but less vibrant. Could be culinary grade or slightly older."
            }
            Grade::LowGradeOld => {
                "Yellow/brown tones or low saturation. Could be oxidized or low-grade matcha."
            }
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A grade together with its tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub grade: Grade,
    pub tip: &'static str,
}

impl From<Grade> for GradeResult {
    fn from(grade: Grade) -> Self {
        Self {
            grade,
            tip: grade.tip(),
        }
    }
}

/// Apply the rule table to a set of channel means.
///
/// Pure: identical stats always produce identical results.
pub fn classify(stats: &ColorStats, thresholds: &GradingThresholds) -> GradeResult {
    let ColorStats {
        mean_hue: hue,
        mean_saturation: saturation,
        mean_value: value,
    } = *stats;

    let grade = if thresholds.ceremonial_hue.contains(hue)
        && saturation >= thresholds.ceremonial_min_saturation
        && value >= thresholds.ceremonial_min_value
    {
        Grade::Ceremonial
    } else if thresholds.culinary_hues.iter().any(|r| r.contains(hue))
        && saturation >= thresholds.culinary_min_saturation
    {
        Grade::CulinaryMedium
    } else {
        Grade::LowGradeOld
    };

    grade.into()
}
