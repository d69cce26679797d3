use axum::Json;
use chrono::Utc;
use serde::Serialize;
use socialx_shared::{ApiResponse, format_date};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        status: "healthy",
        timestamp: format_date(Utc::now()),
    }))
}
