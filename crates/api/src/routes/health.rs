use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness probe payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests.
    pub status: &'static str,
    /// Current server time as an RFC 3339 string.
    pub timestamp: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- reports liveness without touching the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
