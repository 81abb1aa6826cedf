//! HTTP API handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Fixed JSON body returned by the sidecar routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payload {
    /// Result code, 0 on success.
    pub code: i32,
    /// Human readable message.
    pub message: &'static str,
}

/// Body of `GET /api/v1/health-check`.
pub const SUCCESS_PAYLOAD: Payload = Payload {
    code: 0,
    message: "success",
};

/// Body of `GET /api/v1/test`.
pub const TEST_PAYLOAD: Payload = Payload {
    code: 0,
    message: "test",
};

/// Health check handler - always returns 200.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(SUCCESS_PAYLOAD))
}

/// Test handler - always returns 200.
pub async fn test_route() -> impl IntoResponse {
    (StatusCode::OK, Json(TEST_PAYLOAD))
}
