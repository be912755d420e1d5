use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(index))
}

async fn index() -> impl IntoResponse {
    Json(json!({ "message": "BMI Backend API is running" }))
}
