//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an HTML page
pub fn assert_html(response: &TestResponse) {
    assert_ok(response);
    let content_type = response.content_type().unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected HTML, got Content-Type {content_type:?}"
    );
}

/// Assert a JSON grading response carries the expected grade key and tip
pub fn assert_grade(response: &TestResponse, grade: Option<&str>, tip: &str) {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["grade"].as_str(),
        grade,
        "Unexpected grade. Full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert_eq!(json["tip"].as_str(), Some(tip));
}

/// Assert JSON error response has expected status field and message
pub fn assert_json_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_status(response, status);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(status.as_u16() as u64));
    assert_eq!(json["error"].as_str(), Some(message));
}
