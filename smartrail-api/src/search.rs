use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use smartrail_core::models::QueryResponse;
use smartrail_core::stations;
use tracing::info;

use crate::error::AppError;
use crate::state::{AppState, TripContext};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub prefix: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/search", post(search))
        .route("/v1/stations/suggest", get(suggest_stations))
}

/// Submit a free-text travel query. The cache is consulted first (exact
/// string key); otherwise a single parse call goes out. A failed parse is
/// answered in-band with its error message, never as an HTTP failure.
async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::ValidationError("Query must not be empty".into()));
    }
    let query = req.query;

    // A new search supersedes the previous results and selection; until it
    // completes successfully there is nothing to select from.
    state.flow.write().await.clear_selection();
    *state.trip.write().await = None;

    let cached = state.cache.read().await.lookup(&query).cloned();
    if let Some(response) = cached {
        info!("Cache hit for query: {}", query);
        install_trip_context(&state, &response).await;
        return Ok(Json(response));
    }

    let response = state.parser.parse_trip_query(&query).await;

    if response.is_query_valid && response.parsed_query.is_some() {
        state.cache.write().await.store(&query, response.clone());
        install_trip_context(&state, &response).await;
        Ok(Json(response))
    } else {
        let message = response
            .error_message
            .unwrap_or_else(|| "We couldn't understand your request. Please try again.".into());
        Ok(Json(QueryResponse::invalid(message)))
    }
}

async fn install_trip_context(state: &AppState, response: &QueryResponse) {
    if let Some(parsed) = &response.parsed_query {
        let context = TripContext::from_query(parsed.clone(), response.ticket_options.clone());
        *state.trip.write().await = Some(context);
    }
}

/// Autocomplete over the static station directory.
async fn suggest_stations(Query(params): Query<SuggestParams>) -> Json<Vec<&'static str>> {
    Json(stations::suggest(&params.prefix))
}
