//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// TMDB base URL this instance proxies
    pub upstream: String,
}

/// Always returns OK if the server is running
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.config.tmdb.base_url.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
