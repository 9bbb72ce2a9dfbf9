use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP wolkenliste_listings_rendered Listings rendered\n# TYPE wolkenliste_listings_rendered counter\nwolkenliste_listings_rendered {}\n\
# HELP wolkenliste_rows_rendered Rows rendered\n# TYPE wolkenliste_rows_rendered counter\nwolkenliste_rows_rendered {}\n\
# HELP wolkenliste_links_built Row links built\n# TYPE wolkenliste_links_built counter\nwolkenliste_links_built {}\n\
# HELP wolkenliste_actions_handled Listing actions handled\n# TYPE wolkenliste_actions_handled counter\nwolkenliste_actions_handled {}\n\
# HELP wolkenliste_permalinks_copied Permalinks copied\n# TYPE wolkenliste_permalinks_copied counter\nwolkenliste_permalinks_copied {}\n\
# HELP wolkenliste_uptime_seconds Uptime seconds\n# TYPE wolkenliste_uptime_seconds gauge\nwolkenliste_uptime_seconds {}\n",
        m.listings_rendered,
        m.rows_rendered,
        m.links_built,
        m.actions_handled,
        m.permalinks_copied,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
