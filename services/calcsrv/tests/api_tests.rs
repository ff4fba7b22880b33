//! API integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;
use common::{calculate, create_test_router, json_request, send};

#[tokio::test]
async fn test_calculate_contiguous_expression() {
    let app = create_test_router();

    let (status, body) = calculate(&app, "10+5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "result": 15.0,
            "expression": "10.0 + 5.0",
            "formatted_result": "10.0 + 5.0 = 15.0"
        })
    );
}

#[tokio::test]
async fn test_calculate_spaced_and_padded_expression() {
    let app = create_test_router();

    let (status, body) = calculate(&app, "  10   -   2.5 ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 7.5);
    assert_eq!(body["formatted_result"], "10.0 - 2.5 = 7.5");
}

#[tokio::test]
async fn test_calculate_power() {
    let app = create_test_router();

    let (status, body) = calculate(&app, "2^10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 1024.0);
    assert_eq!(body["expression"], "2.0 ^ 10.0");
}

#[tokio::test]
async fn test_calculate_negative_operands() {
    let app = create_test_router();

    let (_, body) = calculate(&app, "10+-5").await;
    assert_eq!(body["expression"], "10.0 + -5.0");
    assert_eq!(body["result"], 5.0);

    let (_, body) = calculate(&app, "-5-3").await;
    assert_eq!(body["expression"], "-5.0 - 3.0");
    assert_eq!(body["result"], -8.0);
}

#[tokio::test]
async fn test_nan_result_is_null() {
    let app = create_test_router();

    let (status, body) = calculate(&app, "-8 ^ 0.5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"], Value::Null);
    assert_eq!(body["formatted_result"], "-8.0 ^ 0.5 = nan");
}

#[tokio::test]
async fn test_division_by_zero_is_bad_request() {
    let app = create_test_router();

    let (status, body) = calculate(&app, "10 / 0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"success": false, "error": "Division by zero is not allowed!"})
    );
}

#[tokio::test]
async fn test_malformed_expression_is_bad_request() {
    let app = create_test_router();

    for expression in ["abc+5", "10 % 5", "1+2+3", "10"] {
        let (status, body) = calculate(&app, expression).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "expression: {}", expression);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid format! Use: number operator number, with or without spaces."
        );
    }
}

#[tokio::test]
async fn test_empty_expression_is_bad_request() {
    let app = create_test_router();
    let expected = json!({"success": false, "error": "Enter an expression to calculate"});

    let (status, body) = calculate(&app, "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = calculate(&app, "   \t ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    // Missing field counts as empty
    let (status, body) = json_request(&app, "POST", "/calculate", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_unreadable_body_is_server_error() {
    let app = create_test_router();

    let (status, bytes) = send(
        &app,
        "POST",
        "/calculate",
        Some("application/json"),
        Some("{not json".to_string()),
    )
    .await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Unknown error: "));
}

#[tokio::test]
async fn test_wrong_expression_type_is_server_error() {
    let app = create_test_router();

    let (status, body) =
        json_request(&app, "POST", "/calculate", Some(json!({"expression": 42}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_missing_content_type_is_server_error() {
    let app = create_test_router();

    let (status, _) = send(
        &app,
        "POST",
        "/calculate",
        None,
        Some(r#"{"expression": "1+1"}"#.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_index_page() {
    let app = create_test_router();

    let (status, bytes) = send(&app, "GET", "/", None, None).await;
    let page = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<title>Basic Calculator</title>"));
    assert!(page.contains("/calculate"));
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_router();

    let (status, body) = json_request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["service"], "calcsrv");
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn test_list_operations() {
    let app = create_test_router();

    let (status, body) = json_request(&app, "GET", "/operations", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "data": {"operations": ["+", "-", "*", "/", "^"]}})
    );
}

#[tokio::test]
async fn test_calculate_rejects_get() {
    let app = create_test_router();

    let (status, _) = send(&app, "GET", "/calculate", None, None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_concurrent_requests_share_calculator() {
    let app = create_test_router();

    let handles: Vec<_> = (1..=16)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, body) = calculate(&app, &format!("{} * 2", i)).await;
                (status, body["result"].as_f64(), i)
            })
        })
        .collect();

    for handle in handles {
        let (status, result, i) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, Some(f64::from(i * 2)));
    }
}
