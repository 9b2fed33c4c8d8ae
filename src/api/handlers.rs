use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::request_id::RequestId;
use crate::services::{search_catalog, SearchQuery};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub catalog_size: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        catalog_size: state.catalog.len(),
    })
}

/// Search the catalog by title, genre ids and description
///
/// Query parameters are taken as ordered pairs so repeated `genre_ids` survive.
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let query = SearchQuery::from_params(&params).inspect_err(|e| {
        tracing::debug!(request_id = %request_id, error = %e, "Rejected search query");
    })?;

    let results = search_catalog(&state.catalog, &query);

    tracing::info!(
        request_id = %request_id,
        has_filters = query.has_filters,
        genre_id_count = query.genre_ids_query.len(),
        result_count = results.len(),
        "Search completed"
    );

    Ok(Json(results).into_response())
}
