//! Integration tests for static dashboard serving and transport limits

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use passboard_common::PassStore;
use passboard_server::{build_router, AppState, BODY_LIMIT_BYTES};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

fn setup_app(static_dir: &Path) -> axum::Router {
    build_router(AppState::new(PassStore::seeded(), static_dir.to_path_buf()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

/// Static dir containing a minimal dashboard build
fn built_dashboard() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!doctype html><title>Passboard</title>",
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("app.js"), "console.log('passboard');").unwrap();
    dir
}

#[tokio::test]
async fn test_missing_build_returns_hint() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(dir.path());

    let response = app.oneshot(get("/passes/pass-cyber-01")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Frontend build not found yet"));
}

#[tokio::test]
async fn test_static_asset_served() {
    let dir = built_dashboard();
    let app = setup_app(dir.path());

    let response = app.oneshot(get("/assets/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response.into_body()).await, "console.log('passboard');");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = built_dashboard();
    let app = setup_app(dir.path());

    let response = app.oneshot(get("/passes/pass-cyber-01")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response.into_body()).await.contains("<title>Passboard</title>"));
}

#[tokio::test]
async fn test_unknown_api_path_is_404() {
    let dir = built_dashboard();
    let app = setup_app(dir.path());

    let response = app.oneshot(get("/api/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(dir.path());

    let padding = "x".repeat(BODY_LIMIT_BYTES + 1);
    let request = Request::builder()
        .method("POST")
        .uri("/api/status")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            r#"{{"passId":"pass-cyber-01","positionId":"pos-ir-lead","status":"offer","note":"{padding}"}}"#
        )))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let dir = TempDir::new().unwrap();
    let app = setup_app(dir.path());

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/status")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
