use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns service metadata.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Portfolio AI Chat Agent API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Portfolio AI Chat Agent"
    }))
}
