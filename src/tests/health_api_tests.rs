use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use super::{body_bytes, body_json};
use crate::config::AppConfig;
use crate::routes;
use crate::state::AppState;

fn setup_test_app() -> Router {
    let state = AppState::new(AppConfig::default()).unwrap();
    routes::api_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_healthz_endpoint() {
    let response = setup_test_app().oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn test_version_endpoint() {
    let response = setup_test_app().oneshot(get("/version")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["name"], "wolkenliste");
    assert!(!v["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = setup_test_app().oneshot(get("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["listings_rendered"], 0);
    assert_eq!(v["links_built"], 0);
}

#[tokio::test]
async fn test_metrics_prometheus_endpoint() {
    let response = setup_test_app().oneshot(get("/metrics/prometheus")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_str = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body_str.contains("wolkenliste_listings_rendered 0"));
    assert!(body_str.contains("wolkenliste_permalinks_copied 0"));
    assert!(body_str.contains("# TYPE wolkenliste_uptime_seconds gauge"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = setup_test_app().oneshot(get("/scans")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
