//! `razzie serve` -- HTTP JSON API for the win-interval analysis.
//!
//! Exposes the dataset and its analysis as an async HTTP service using
//! `axum` + `tokio`. The dataset is loaded once at startup; every response
//! is computed from that in-memory copy.
//!
//! Endpoints:
//! - GET  /health            - Server status
//! - GET  /movies            - The loaded dataset
//! - GET  /movies/intervals  - Min/max win intervals for the loaded dataset
//! - POST /intervals         - Ad-hoc analysis of records in the request body
//!
//! All responses use Content-Type: application/json. CORS is permissive for
//! local use; there is no authentication.

mod handlers;
mod state;

use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_analyze, handle_health, handle_intervals, handle_list_movies, handle_not_found,
};
use self::state::AppState;

/// Maximum request body size: 10 MB.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Start the HTTP server on the given port, loading the dataset first.
///
/// Fails fast if the dataset cannot be read or parsed; a server with no
/// data has nothing to serve.
pub async fn start_server(port: u16, data: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let records = razzie_core::load_csv(data)?;
    let summary = razzie_core::analyze(&records);
    eprintln!("Loaded {} records from {}", records.len(), data.display());

    let state = Arc::new(AppState { records, summary });

    // CORS: permissive, this is a local analysis service
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/movies", get(handle_list_movies))
        .route("/movies/intervals", get(handle_intervals))
        .route("/intervals", post(handle_analyze))
        .fallback(handle_not_found)
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    eprintln!("razzie listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("\nServer shut down.");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    eprintln!("\nReceived shutdown signal...");
}
