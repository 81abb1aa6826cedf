//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{health_check, test_route};

/// Path prefix shared by every sidecar route.
pub const API_PREFIX: &str = "/api/v1";

/// Register the sidecar routes on `router` and hand it back.
///
/// Routes live in a group nested under [`API_PREFIX`]:
///
/// - `GET /api/v1/health-check`
/// - `GET /api/v1/test`
pub fn setup_router(router: Router) -> Router {
    router.nest(API_PREFIX, api_routes())
}

/// Create the default router: sidecar routes plus request tracing and
/// panic recovery.
pub fn create_router() -> Router {
    setup_router(Router::new())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/test", get(test_route))
}
