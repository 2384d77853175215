//! HTTP surface tests driven through the router without a socket.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use ecommerce_api::AppState;
use ecommerce_api::api::middleware::REQUEST_ID_HEADER;
use ecommerce_api::api::routes::create_router;
use ecommerce_api::config::Settings;

fn app(settings: Settings) -> Router {
    create_router(AppState::new(Arc::new(settings)))
}

async fn get(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn root_greets_with_app_name() {
    let settings = Settings {
        app_name: "Corner Shop".to_string(),
        app_version: "2.3.4".to_string(),
        ..Settings::default()
    };
    let (status, _, body) = get(app(settings), "/").await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["message"], "Welcome to Corner Shop");
    assert_eq!(body["version"], "2.3.4");
    assert_eq!(body["docs"], "/docs");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, _, body) = get(app(Settings::default()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn openapi_document_uses_settings() {
    let settings = Settings {
        app_name: "Corner Shop".to_string(),
        app_version: "2.3.4".to_string(),
        ..Settings::default()
    };
    let (status, _, body) = get(app(settings), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc = json(&body);
    assert_eq!(doc["info"]["title"], "Corner Shop");
    assert_eq!(doc["info"]["version"], "2.3.4");
    assert_eq!(
        doc["info"]["description"],
        "A REST API for an e-commerce platform"
    );
    assert!(doc["paths"]["/health"].is_object());
    assert!(doc["paths"]["/"].is_object());
}

#[tokio::test]
async fn docs_are_served() {
    let (status, _, _) = get(app(Settings::default()), "/docs").await;
    assert_ne!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn redoc_is_served_as_html() {
    let (status, headers, body) = get(app(Settings::default()), "/redoc").await;

    assert_eq!(status, StatusCode::OK);
    let content_type = headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("redoc"));
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (status, _, body) = get(app(Settings::default()), "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = json(&body);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("/no/such/page"));
    assert_eq!(body["details"]["path"], "/no/such/page");
}

#[tokio::test]
async fn request_id_is_generated() {
    let (_, headers, _) = get(app(Settings::default()), "/health").await;
    let id = headers[REQUEST_ID_HEADER].to_str().unwrap();
    // Hyphenated UUID
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}

#[tokio::test]
async fn request_id_is_propagated() {
    let response = app(Settings::default())
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me-123");
}

#[tokio::test]
async fn request_id_is_echoed_on_404() {
    let response = app(Settings::default())
        .oneshot(
            Request::builder()
                .uri("/missing")
                .header(REQUEST_ID_HEADER, "lost-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "lost-42");
}

#[tokio::test]
async fn debug_mode_allows_cross_origin() {
    let settings = Settings {
        debug: true,
        ..Settings::default()
    };
    let response = app(settings)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
async fn production_mode_sends_no_cors_headers() {
    let response = app(Settings::default())
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
