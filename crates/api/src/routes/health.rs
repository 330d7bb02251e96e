use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether an AI provider credential is configured.
    pub ai_configured: bool,
    /// Horoscope results currently held in memory.
    pub cached_horoscopes: usize,
}

/// GET /health -- returns service status and cache size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ai_configured = state.config.gemini.api_key.is_some();
    let status = if ai_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        ai_configured,
        cached_horoscopes: state.horoscope.cached_entries().await,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
