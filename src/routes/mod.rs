//! HTTP route handlers for the Wolkenliste API.
//!
//! - `health`: health check, version and metrics endpoints
//! - `listing`: listing render and listing action endpoints

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod health;
pub mod listing;

/// All API routes with state applied. Middleware layers are added by the caller.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/api/listing", post(listing::render_listing))
        .route("/api/listing/actions", post(listing::listing_action))
        .with_state(state)
}
