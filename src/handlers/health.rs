use axum::http::StatusCode;

pub const HEALTHY: &str = "healthy";

/// Liveness check shared by both services
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}
