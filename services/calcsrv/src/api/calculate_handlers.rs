//! Calculation API Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use common::SuccessResponse;
use std::sync::Arc;
use tracing::debug;

use crate::app_state::AppState;
use crate::dto::{CalculateRequest, CalculateResponse, OperationsData};
use crate::error::{CalcSrvError, Result};

/// Evaluate a single binary expression
///
/// @route POST /calculate
/// @input request: Json<CalculateRequest> - `{"expression": "10 + 5"}`
/// @output Json<CalculateResponse> - Result plus the normalised expression
/// @status 400 - Empty, malformed or unsupported expression, division by zero
/// @status 500 - Unreadable request body
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    post,
    path = "/calculate",
    tag = "calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Expression evaluated", body = CalculateResponse),
        (status = 400, description = "Invalid expression", body = common::ErrorResponse,
            example = json!({"success": false, "error": "Division by zero is not allowed!"})),
        (status = 500, description = "Unreadable request", body = common::ErrorResponse)
    )
))]
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>> {
    let Json(request) = payload.map_err(|rejection| CalcSrvError::internal(rejection.body_text()))?;

    let expression = request.expression.as_deref().map(str::trim).unwrap_or_default();
    if expression.is_empty() {
        return Err(CalcSrvError::EmptyExpression);
    }

    let calculation = state.calculator.evaluate(expression)?;
    debug!(expression = %expression, result = %calculation.result, "Calculated");

    Ok(Json(CalculateResponse::from(&calculation)))
}

/// List supported operator symbols in priority order
///
/// @route GET /operations
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/operations",
    tag = "calculator",
    responses(
        (status = 200, description = "Supported operators",
            body = inline(Object),
            example = json!({"success": true, "data": {"operations": ["+", "-", "*", "/", "^"]}}))
    )
))]
pub async fn list_operations(
    State(state): State<Arc<AppState>>,
) -> Json<SuccessResponse<OperationsData>> {
    let operations = state
        .calculator
        .available_operations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    Json(SuccessResponse::new(OperationsData { operations }))
}
