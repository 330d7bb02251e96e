//! Handlers for the live channel catalog.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use duang_core::channels::{all_channels, find_channel, LiveChannel};

use crate::error::AppResult;

/// GET /api/v1/channels
pub async fn list_channels() -> Json<&'static [LiveChannel]> {
    Json(all_channels())
}

/// GET /api/v1/channels/{id}
pub async fn get_channel(Path(channel_id): Path<String>) -> AppResult<impl IntoResponse> {
    let channel = find_channel(&channel_id)?;
    Ok(Json(channel))
}
