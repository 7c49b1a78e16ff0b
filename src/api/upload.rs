//! HTML upload page.
//!
//! Form errors ("No file part", "No selected file") are rendered inline on
//! the page with status 200, the same way grading results are.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{GradingService, PageRenderer, PageView};

/// Form field carrying the uploaded image
pub const FILE_FIELD: &str = "file";

/// Show the empty upload form
pub async fn handle_index(
    State(pages): State<Arc<PageRenderer>>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(pages.render(&PageView::default())?))
}

/// Grade the uploaded file and show the result below the form
pub async fn handle_upload(
    State(grader): State<Arc<GradingService>>,
    State(pages): State<Arc<PageRenderer>>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let view = match read_file_field(multipart).await {
        Ok(bytes) => {
            let outcome = grader.grade_bytes(bytes).await?;
            PageView {
                error: None,
                grade: outcome.grade.map(|g| g.label().to_string()),
                tip: Some(outcome.tip.to_string()),
            }
        }
        Err(e @ (ApiError::MissingFile | ApiError::EmptyFilename)) => {
            tracing::debug!(error = %e, "Upload rejected");
            PageView {
                error: Some(e.to_string()),
                ..Default::default()
            }
        }
        Err(e) => return Err(e),
    };

    Ok(Html(pages.render(&view)?))
}

/// Pull the bytes of the `file` file part out of a multipart body.
///
/// A browser submitting the form without choosing a file still sends the
/// part, with an empty filename. A plain text field named `file` is not a
/// file part and is skipped.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            None => continue,
            Some("") => return Err(ApiError::EmptyFilename),
            Some(name) => name.to_string(),
        };

        let bytes = field.bytes().await?;
        tracing::debug!(file_name = %file_name, bytes = bytes.len(), "Received upload");
        return Ok(bytes);
    }

    Err(ApiError::MissingFile)
}
