//! Failure paths: every one resolves to a failure envelope, never a panic.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use storekit_client::{ApiResponse, create_api_client};
use storekit_core::{ApiError, Product};
use storekit_integration_tests::{MockBackend, Reply, unused_port};

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let port = unused_port().await.unwrap();
    let client = create_api_client(format!("http://127.0.0.1:{port}")).unwrap();

    let response: ApiResponse<Product> = client.get("/products/42").await;

    let error = response.error().unwrap();
    assert!(
        error.message.starts_with("Network error"),
        "message: {}",
        error.message
    );
    assert_eq!(error.code.as_deref(), Some("NETWORK_ERROR"));
    assert!(response.data().is_none());
}

#[tokio::test]
async fn test_structured_error_body_is_preserved() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::POST,
            "/auth/register",
            Reply::json(
                StatusCode::CONFLICT,
                json!({
                    "message": "Email already registered",
                    "code": "DUPLICATE_EMAIL",
                    "field": "email"
                }),
            ),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Value> = client
        .post("/auth/register", Some(&json!({ "email": "ada@example.com" })))
        .await;

    assert_eq!(
        response.into_result().unwrap_err(),
        ApiError::new("HTTP error! status: 409: Email already registered")
            .with_code("DUPLICATE_EMAIL")
            .with_field("email")
    );
}

#[tokio::test]
async fn test_not_found_with_json_body_keeps_status() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::GET,
            "/products/999",
            Reply::json(
                StatusCode::NOT_FOUND,
                json!({ "message": "Product not found", "code": "NOT_FOUND" }),
            ),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Product> = client.get("/products/999").await;

    let error = response.error().unwrap();
    assert_eq!(error.message, "HTTP error! status: 404: Product not found");
    assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));

    let envelope = serde_json::to_string(&response).unwrap();
    assert!(envelope.contains("404"), "envelope: {envelope}");
}

#[tokio::test]
async fn test_wrapped_error_body_gets_status_code() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::GET,
            "/orders/o-9",
            Reply::json(
                StatusCode::FORBIDDEN,
                json!({ "error": "Not your order" }),
            ),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Value> = client.get("/orders/o-9").await;

    let error = response.error().unwrap();
    assert_eq!(error.message, "HTTP error! status: 403: Not your order");
    assert_eq!(error.code.as_deref(), Some("HTTP_403"));
}

#[tokio::test]
async fn test_non_json_failure_body_falls_back_to_status() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::GET,
            "/products",
            Reply::text(StatusCode::BAD_GATEWAY, "<html>upstream down</html>"),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Vec<Product>> = client.get("/products").await;

    let error = response.error().unwrap();
    assert_eq!(error.message, "HTTP error! status: 502");
    assert_eq!(error.code.as_deref(), Some("HTTP_502"));
}

#[tokio::test]
async fn test_invalid_success_body_is_parse_error() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::GET,
            "/products/42",
            Reply::text(StatusCode::OK, "not json"),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Product> = client.get("/products/42").await;

    let error = response.error().unwrap();
    assert!(error.message.starts_with("Failed to parse response body"));
    assert_eq!(error.code.as_deref(), Some("PARSE_ERROR"));
}

#[tokio::test]
async fn test_mismatched_success_body_is_parse_error() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(
            Method::GET,
            "/products/42",
            Reply::json(StatusCode::OK, json!({ "id": "42" })),
        )
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Product> = client.get("/products/42").await;

    assert_eq!(response.error().unwrap().code.as_deref(), Some("PARSE_ERROR"));
}

#[tokio::test]
async fn test_empty_body_for_required_payload_is_parse_error() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(Method::GET, "/products/42", Reply::empty(StatusCode::OK))
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<Product> = client.get("/products/42").await;

    assert!(response.is_failure());

    let response: ApiResponse<Option<Product>> = client.get("/products/42").await;
    assert_eq!(response, ApiResponse::Success(None));
}

#[tokio::test]
async fn test_failure_envelope_serializes_structured_error() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .respond(Method::DELETE, "/carts/abc", Reply::empty(StatusCode::NOT_FOUND))
        .await;

    let client = create_api_client(backend.base_url()).unwrap();
    let response: ApiResponse<()> = client.delete("/carts/abc").await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "success": false,
            "error": { "message": "HTTP error! status: 404", "code": "HTTP_404" }
        })
    );
}
