use axum::body::Bytes;
use matcha_grade::{GradeOutcome, GradingPipeline, ImageSource};
use std::sync::Arc;

use crate::error::ApiError;

/// Async front for the grading pipeline
pub struct GradingService {
    pipeline: Arc<GradingPipeline>,
}

impl GradingService {
    pub fn new(pipeline: GradingPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn pipeline(&self) -> &GradingPipeline {
        &self.pipeline
    }

    /// Grade an uploaded image held in memory
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// decoding, resizing and color analysis.
    pub async fn grade_bytes(&self, bytes: Bytes) -> Result<GradeOutcome, ApiError> {
        let pipeline = self.pipeline.clone();
        let size = bytes.len();

        let outcome =
            tokio::task::spawn_blocking(move || pipeline.grade(ImageSource::Bytes(&bytes[..])))
                .await
                .map_err(|e| ApiError::Internal(format!("Grading task failed: {e}")))?;

        tracing::info!(
            bytes = size,
            grade = outcome.grade.map(|g| g.key()).unwrap_or("ungraded"),
            "Graded sample"
        );

        Ok(outcome)
    }
}
