use axum::routing::get;
use axum::Router;

use crate::handlers::channels;
use crate::state::AppState;

/// Live channel routes mounted at `/channels`.
///
/// ```text
/// GET /       -> list_channels
/// GET /{id}   -> get_channel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(channels::list_channels))
        .route("/{id}", get(channels::get_channel))
}
