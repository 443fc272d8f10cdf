//! Liveness, readiness and build info for whoever runs the server.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD_INFO: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// The process is up; storage is not consulted.
async fn live() -> Json<Probe> {
    Json(Probe {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "storage unreachable, reporting not ready");
        let probe = Probe {
            status: "degraded",
            database: Some("unavailable"),
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(probe));
    }
    let probe = Probe {
        status: "ok",
        database: Some("ok"),
    };
    (StatusCode::OK, Json(probe))
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD_INFO)
}

/// GET /health, GET /ready (one storage round-trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
