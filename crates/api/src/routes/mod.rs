pub mod channels;
pub mod health;
pub mod horoscope;

use axum::Router;

use crate::state::AppState;

/// Routes answered from in-process data.
///
/// ```text
/// /health                          liveness, AI credential, cache size
/// /api/v1/channels                 live channel catalog
/// /api/v1/channels/{id}            one channel
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/channels", channels::router())
}

/// Routes that may wait on the AI provider.
///
/// ```text
/// /api/v1/horoscope/signs          list of sign codes
/// /api/v1/horoscope/signs/{sign}   weekly forecast for one sign
/// /api/v1/horoscope/daily          general forecast for today
/// /api/v1/horoscope/weekly         general forecast for the week
/// /api/v1/horoscope/birthdate      personal reading (GET ?date= or POST)
/// ```
pub fn generation_routes() -> Router<AppState> {
    Router::new().nest("/api/v1/horoscope", horoscope::router())
}
