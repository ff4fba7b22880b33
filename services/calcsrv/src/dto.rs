//! Data Transfer Objects for the calculator API

use calc_core::Calculation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /calculate`
///
/// A missing `expression` is treated like an empty one.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculateRequest {
    #[serde(default)]
    #[schema(example = "10 + 5")]
    pub expression: Option<String>,
}

/// Successful calculation
///
/// `result` is `null` when the value is NaN or infinite.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    pub success: bool,
    #[schema(example = 15.0)]
    pub result: f64,
    #[schema(example = "10.0 + 5.0")]
    pub expression: String,
    #[schema(example = "10.0 + 5.0 = 15.0")]
    pub formatted_result: String,
}

impl From<&Calculation> for CalculateResponse {
    fn from(calc: &Calculation) -> Self {
        Self {
            success: true,
            result: calc.result,
            expression: calc.expression(),
            formatted_result: calc.formatted(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationsData {
    pub operations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
