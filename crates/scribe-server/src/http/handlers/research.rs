//! POST /research handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use scribe_core::ExecutionRequest;

use crate::http::responses::{ResearchRequest, ResearchResponse, ValidationError};
use crate::service::ResearchService;
use crate::state::AppState;

/// POST /research - research a topic and return formatted text.
pub async fn research(
    State(state): State<Arc<AppState>>,
    json_result: Result<Json<ResearchRequest>, JsonRejection>,
) -> Response {
    let req = match json_result {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected research request body");
            return ValidationError {
                message: rejection.body_text(),
            }
            .into_response();
        }
    };

    let request = match ExecutionRequest::new(req.topic, &req.output_format) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Invalid research request");
            return ValidationError {
                message: e.to_string(),
            }
            .into_response();
        }
    };

    info!(
        topic = %request.topic,
        output_format = %request.output_format,
        "Received research request"
    );

    match ResearchService::new(state).handle(&request).await {
        Ok(result) => (StatusCode::OK, Json(ResearchResponse { result })).into_response(),
        Err(e) => {
            warn!(error = %e, "Research request failed");
            e.into_response()
        }
    }
}
