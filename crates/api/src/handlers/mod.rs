pub mod channels;
pub mod horoscope;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for paths no route matches; keeps 404 bodies in the JSON
/// error shape.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
