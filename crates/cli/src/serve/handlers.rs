//! HTTP route handlers: health, movies, intervals.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use razzie_core::MovieRecord;

use super::json_error;
use super::state::AppState;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": razzie_core::RAZZIE_VERSION,
    });
    (StatusCode::OK, Json(response))
}

/// GET /movies
pub(crate) async fn handle_list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = serde_json::json!({
        "movies": state.records,
        "count": state.records.len(),
    });
    (StatusCode::OK, Json(response))
}

/// GET /movies/intervals
pub(crate) async fn handle_intervals(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.summary.clone()))
}

/// POST /intervals
///
/// Body: `{"movies": [MovieRecord, ...]}`. Runs the analysis over the
/// posted records instead of the loaded dataset.
pub(crate) async fn handle_analyze(Json(parsed): Json<serde_json::Value>) -> impl IntoResponse {
    let movies = match parsed.get("movies") {
        Some(m) => m.clone(),
        None => {
            return json_error(StatusCode::BAD_REQUEST, "missing 'movies' field").into_response()
        }
    };

    let records: Vec<MovieRecord> = match serde_json::from_value(movies) {
        Ok(r) => r,
        Err(e) => {
            return json_error(
                StatusCode::BAD_REQUEST,
                &format!("invalid 'movies' field: {}", e),
            )
            .into_response()
        }
    };

    let summary = razzie_core::analyze(&records);
    (StatusCode::OK, Json(summary)).into_response()
}
