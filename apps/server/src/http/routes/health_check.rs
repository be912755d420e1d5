use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/health", get(health))
}

/// Liveness probe for load balancers and the process supervisor. Reports on
/// the process only, not on database reachability.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "OK" }))
}
