//! Health Check API Handlers

use axum::response::Json;
use common::SuccessResponse;

use crate::dto::HealthData;

pub const SERVICE_NAME: &str = "calcsrv";

/// Health check endpoint
///
/// @route GET /health
/// @output Json<SuccessResponse<HealthData>> - Service status
/// @side-effects None (read-only operation)
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/health",
    tag = "calculator",
    responses(
        (status = 200, description = "Service is healthy", body = inline(Object),
            example = json!({
                "success": true,
                "data": {
                    "status": "healthy",
                    "service": "calcsrv",
                    "version": "0.1.0",
                    "timestamp": "2025-01-01T00:00:00+00:00"
                }
            }))
    )
))]
pub async fn health_check() -> Json<SuccessResponse<HealthData>> {
    Json(SuccessResponse::new(HealthData {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
