use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use duang_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries the HTTP-only failures
/// (unreadable request, unknown route) so every error body has the same
/// `{"error": ..., "code": ...}` shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `duang_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body or query string could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No route for {path}"),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a domain error to an HTTP status, error code, and message.
///
/// - Caller input problems map to 400/404.
/// - Upstream problems map to 500; the provider's raw detail is logged,
///   not returned.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::InvalidDateFormat(_) => (
            StatusCode::BAD_REQUEST,
            "INVALID_DATE_FORMAT",
            "Birth date must be a past date in YYYY-MM-DD or D/M/YYYY form".to_string(),
        ),
        CoreError::UnknownZodiacSign(code) => (
            StatusCode::NOT_FOUND,
            "UNKNOWN_ZODIAC_SIGN",
            format!("Unknown zodiac sign: {code}"),
        ),
        CoreError::UnknownChannel(id) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Channel {id} not found"),
        ),
        CoreError::UpstreamUnavailable => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UPSTREAM_UNAVAILABLE",
            err.to_string(),
        ),
        CoreError::UpstreamEmpty | CoreError::UpstreamFailed(_) => {
            tracing::error!(error = %err, "Upstream AI error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                "AI service did not return a result".to_string(),
            )
        }
        CoreError::InvalidAiFormat(_) => {
            tracing::error!(error = %err, "Unusable AI response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_AI_FORMAT",
                "AI service returned an unreadable result".to_string(),
            )
        }
    }
}
