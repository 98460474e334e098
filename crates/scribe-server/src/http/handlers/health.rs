//! Root and health handlers.

use axum::{response::IntoResponse, Json};

use crate::http::responses::MessageResponse;

const USAGE: &str = "Welcome to the Julep Research Assistant API!. Please use the /research \
endpoint for research queries. With a topic and a output format ('summary', 'bullet points', \
'short report').";

/// Usage probe.
pub async fn root() -> impl IntoResponse {
    Json(MessageResponse { message: USAGE })
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
