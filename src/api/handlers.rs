use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;

use crate::orchestrator::Orchestrator;

use super::models::{ErrorBody, SearchRequest, SearchResponse};

pub async fn search_handler(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorBody>)> {
    if request.query.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Query is required".to_string(),
            }),
        ));
    }

    info!(query = %request.query, "handling search");

    let response = orchestrator
        .search(&request.query, request.previous_results.as_deref())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: format!("An error occurred while processing your request: {e}"),
                }),
            )
        })?;

    Ok(Json(response))
}
