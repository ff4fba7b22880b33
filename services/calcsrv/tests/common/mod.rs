//! Shared helpers for calcsrv integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calc_core::Calculator;
use calcsrv::{create_routes, AppState, ServerConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router backed by a fresh calculator and default config
pub fn create_test_router() -> Router {
    let calculator = Calculator::new().unwrap();
    let state = Arc::new(AppState::new(calculator, ServerConfig::default()));
    create_routes(state)
}

/// Send a request with an optional raw body and return status plus raw bytes
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

/// Helper to make JSON requests
pub async fn json_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|json| serde_json::to_string(&json).unwrap());
    let (status, bytes) = send(app, method, uri, Some("application/json"), body).await;

    let body: Value = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// POST an expression to /calculate
pub async fn calculate(app: &Router, expression: &str) -> (StatusCode, Value) {
    json_request(app, "POST", "/calculate", Some(json!({ "expression": expression }))).await
}
