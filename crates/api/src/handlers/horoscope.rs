//! Handlers for horoscope content.
//!
//! Success bodies are the generated JSON object as-is; failures go through
//! [`AppError`](crate::error::AppError) and render as
//! `{"error": ..., "code": ...}`, extractor rejections included.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use duang_core::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Query string for `GET /horoscope/birthdate`.
#[derive(Debug, Deserialize)]
pub struct BirthDateQuery {
    pub date: Option<String>,
}

/// Body for `POST /horoscope/birthdate`.
#[derive(Debug, Deserialize)]
pub struct BirthDateRequest {
    pub birth_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignSummary {
    pub code: &'static str,
    pub label: &'static str,
}

/// GET /api/v1/horoscope/signs
pub async fn list_signs() -> Json<Vec<SignSummary>> {
    Json(
        ZodiacSign::all()
            .iter()
            .map(|s| SignSummary {
                code: s.code(),
                label: s.label(),
            })
            .collect(),
    )
}

/// GET /api/v1/horoscope/signs/{sign}
///
/// Seven-day forecast for one sign. Unknown codes return 404 without
/// contacting the AI provider.
pub async fn sign_forecast(
    State(state): State<AppState>,
    Path(sign): Path<String>,
) -> AppResult<impl IntoResponse> {
    let forecast = state.horoscope.sign_forecast(&sign).await?;
    Ok(Json(forecast))
}

/// GET /api/v1/horoscope/daily
pub async fn daily_forecast(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let forecast = state.horoscope.daily_forecast().await?;
    Ok(Json(forecast))
}

/// GET /api/v1/horoscope/weekly
pub async fn weekly_forecast(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let forecast = state.horoscope.weekly_forecast().await?;
    Ok(Json(forecast))
}

/// GET /api/v1/horoscope/birthdate?date=...
pub async fn birth_date_reading(
    State(state): State<AppState>,
    query: Result<Query<BirthDateQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(query) = query?;
    let input = query.date.unwrap_or_default();
    let reading = state.horoscope.birth_date_reading(&input).await?;
    Ok(Json(reading))
}

/// POST /api/v1/horoscope/birthdate
pub async fn birth_date_reading_from_body(
    State(state): State<AppState>,
    body: Result<Json<BirthDateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let birth_date = input.birth_date.unwrap_or_default();
    let reading = state.horoscope.birth_date_reading(&birth_date).await?;
    Ok(Json(reading))
}
