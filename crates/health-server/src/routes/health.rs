//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Status reported while the process is able to serve requests.
pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: HEALTHY })
}
