use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "skillsense-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /health/ready
/// Readiness probe for orchestration. The catalogs and model are built in
/// main before the listener binds, so a serving process is always ready.
pub async fn readiness_handler() -> Json<Value> {
    Json(json!({
        "ready": true,
        "modelsLoaded": true,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
