//! Crate-level tests for the Wolkenliste service.
//!
//! Unit tests for the listing core live next to the code in `src/listing/`.
//! The modules here exercise the service around it:
//!
//! - **api_tests**: listing render and action endpoints
//! - **health_api_tests**: health, version and metrics endpoints
//! - **config_tests**: configuration loading and validation
//! - **error_tests**: error mapping and request validation
//!
//! Run a single module with e.g. `cargo test api_tests`.

mod health_api_tests;

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt; // for .collect()

pub(crate) fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
