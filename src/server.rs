//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{GradingService, PageRenderer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub grader: Arc<GradingService>,
    pub pages: Arc<PageRenderer>,
}

/// Create application state from configuration.
///
/// Fails if the configured pipeline options are out of range.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let pipeline = config
        .build_pipeline()
        .map_err(|e| anyhow::anyhow!("Invalid pipeline configuration: {e}"))?;
    let pages = PageRenderer::new()
        .map_err(|e| anyhow::anyhow!("Failed to load page templates: {e}"))?;

    Ok(AppState {
        config: Arc::new(config),
        grader: Arc::new(GradingService::new(pipeline)),
        pages: Arc::new(pages),
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_bytes;

    Router::new()
        // Upload page
        .route("/", get(handle_index).post(handle_upload))
        // JSON API
        .route("/api/grade", post(handle_grade))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_index(
    State(state): State<AppState>,
) -> Result<axum::response::Html<String>, ApiError> {
    api::handle_index(State(state.pages)).await
}

async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<axum::response::Html<String>, ApiError> {
    api::handle_upload(State(state.grader), State(state.pages), multipart).await
}

async fn handle_grade(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> Result<axum::response::Response, ApiError> {
    use axum::response::IntoResponse;

    api::handle_grade(State(state.grader), body)
        .await
        .map(IntoResponse::into_response)
}
