use axum::response::Json;
use serde_json::json;

/// Health check endpoint handler.
///
/// # Route
/// - **Method**: GET
/// - **Path**: `/ping`
/// - **Auth**: none
///
/// # Response Format
/// ```json
/// { "status": "pong" }
/// ```
///
/// Used by load balancers and container probes; touches no shared state.
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}
