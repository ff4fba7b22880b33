//! Error handling for the calculator service
//!
//! Every error is rendered as `{"success": false, "error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_core::CalcError;
use common::AppError;
use thiserror::Error;

pub const EMPTY_EXPRESSION_MESSAGE: &str = "Enter an expression to calculate";

pub type Result<T> = std::result::Result<T, CalcSrvError>;

#[derive(Debug, Error)]
pub enum CalcSrvError {
    /// Parse or operation failure reported by the core
    #[error(transparent)]
    Calculation(#[from] CalcError),

    #[error("{}", EMPTY_EXPRESSION_MESSAGE)]
    EmptyExpression,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Internal(String),
}

impl CalcSrvError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Calculation(e) if e.is_user_error() => StatusCode::BAD_REQUEST,
            Self::EmptyExpression => StatusCode::BAD_REQUEST,
            Self::Calculation(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Message sent to the client
    ///
    /// Server-side failures carry the `Unknown error: ` prefix.
    pub fn client_message(&self) -> String {
        match self {
            Self::Calculation(e) if !e.is_user_error() => format!("Unknown error: {}", e),
            Self::Config(msg) => format!("Unknown error: {}", msg),
            other => other.to_string(),
        }
    }
}

impl From<figment::Error> for CalcSrvError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl IntoResponse for CalcSrvError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        AppError::new(status, self.client_message()).into_response()
    }
}
