use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process and storage status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let storage = match state.store.load().await {
        Ok(_) => "operational",
        Err(e) => {
            log::warn!("Health check: storage unavailable: {}", e);
            "unavailable"
        }
    };

    let health = json!({
        "status": if storage == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "storage": storage,
            "pendingVerifications": state.session.pending_verifications().await,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
