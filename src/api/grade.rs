use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::GradeReport;
use crate::services::GradingService;

/// Grade a matcha photo
///
/// The request body is the raw image file (JPEG, PNG, WebP, ...). An image
/// that cannot be decoded is not an error: the response carries a `null`
/// grade and the tip "Could not read image".
#[utoipa::path(
    post,
    path = "/api/grade",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Image file bytes"),
    responses(
        (status = 200, description = "Sample graded (grade is null if unreadable or too small)", body = GradeReport),
        (status = 400, description = "Empty request body"),
        (status = 413, description = "Image exceeds the upload limit"),
    ),
    tag = "Grading"
)]
pub async fn handle_grade(
    State(grader): State<Arc<GradingService>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    if body.is_empty() {
        return Err(ApiError::MissingFile);
    }

    let outcome = grader.grade_bytes(body).await?;
    Ok(Json(GradeReport::from(outcome)))
}
