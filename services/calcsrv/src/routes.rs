//! API Route Configuration
//!
//! Central route definition for all calculator service endpoints

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;

use crate::api::calculate_handlers::{calculate, list_operations};
use crate::api::health_handlers::health_check;
use crate::api::page_handlers::index;
use crate::app_state::AppState;

// OpenAPI documentation - only compiled when swagger-ui feature is enabled
#[cfg(feature = "swagger-ui")]
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::calculate_handlers::calculate,
        crate::api::calculate_handlers::list_operations,
        crate::api::health_handlers::health_check
    ),
    components(
        schemas(
            crate::dto::CalculateRequest,
            crate::dto::CalculateResponse,
            crate::dto::OperationsData,
            crate::dto::HealthData,
            common::ErrorResponse
        )
    ),
    tags(
        (name = "calculator", description = "Basic arithmetic calculator API")
    )
)]
pub struct CalcsrvApiDoc;

/// Create all routes for the calculator service
pub fn create_routes(state: Arc<AppState>) -> Router {
    let debug = state.config.debug;

    let router = Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .route("/operations", get(list_operations))
        .route("/health", get(health_check))
        // Apply HTTP request logging middleware
        .layer(axum::middleware::from_fn(common::logging::http_request_logger))
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", CalcsrvApiDoc::openapi()),
    );

    // Per-request spans in debug mode only
    if debug {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}
