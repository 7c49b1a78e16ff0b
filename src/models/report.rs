use matcha_grade::GradeOutcome;
use serde::Serialize;
use utoipa::ToSchema;

/// Serializable grading result shared by the JSON API and `grade --json`
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct GradeReport {
    /// Machine key: `ceremonial`, `culinary_medium` or `low_grade_old`.
    /// `null` when the image could not be read.
    pub grade: Option<String>,
    /// Human-readable grade label
    pub label: Option<String>,
    /// Advice for the user, or why no grade was given
    pub tip: String,
}

impl From<GradeOutcome> for GradeReport {
    fn from(outcome: GradeOutcome) -> Self {
        Self {
            grade: outcome.grade.map(|g| g.key().to_string()),
            label: outcome.grade.map(|g| g.label().to_string()),
            tip: outcome.tip.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcha_grade::Grade;

    #[test]
    fn test_report_from_graded_outcome() {
        let report = GradeReport::from(GradeOutcome {
            grade: Some(Grade::CulinaryMedium),
            tip: Grade::CulinaryMedium.tip(),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["grade"], "culinary_medium");
        assert_eq!(json["label"], "Culinary/Medium");
        assert_eq!(
            json["tip"],
            "Green but less vibrant. Could be culinary grade or slightly older."
        );
    }

    #[test]
    fn test_report_from_unreadable_outcome() {
        let json = serde_json::to_value(GradeReport::from(GradeOutcome::unreadable())).unwrap();
        assert!(json["grade"].is_null());
        assert!(json["label"].is_null());
        assert_eq!(json["tip"], "Could not read image");
    }
}
