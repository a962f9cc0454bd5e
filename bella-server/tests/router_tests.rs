//! Router tests for the static host
//!
//! Run with: cargo test -p bella-italia-server --test router_tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use bella_server::{build_router, SiteConfig};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body>bella-shell</body></html>";

/// Build a router over a throwaway dist directory
fn test_app() -> (TempDir, Router) {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir_all(dist.path().join("assets")).unwrap();
    std::fs::write(dist.path().join("assets/logo.png"), b"\x89PNG").unwrap();

    let mut config = SiteConfig::default();
    config.site.dist_dir = dist.path().to_path_buf();

    let app = build_router(&config);
    (dist, app)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_root_serves_app_shell() {
    let (_dist, app) = test_app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("bella-shell"));
}

#[tokio::test]
async fn test_client_routes_fall_back_to_shell() {
    for path in ["/menu", "/contact", "/no-such-page"] {
        let (_dist, app) = test_app();
        let (status, body) = get(app, path).await;

        assert_eq!(status, StatusCode::OK, "path {}", path);
        assert!(body.contains("bella-shell"), "path {}", path);
    }
}

#[tokio::test]
async fn test_static_asset_served() {
    let (_dist, app) = test_app();
    let (status, body) = get(app, "/assets/logo.png").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("bella-shell"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dist, app) = test_app();
    let (status, body) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], bella_server::VERSION);
    assert!(json["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_readiness_follows_index_file() {
    let (dist, app) = test_app();
    let (status, _) = get(app.clone(), "/api/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    std::fs::remove_file(dist.path().join("index.html")).unwrap();
    let (status, body) = get(app, "/api/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["ready"], false);
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let (_dist, app) = test_app();
    let (status, body) = get(app, "/api/reservations").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["status"], 404);
}
