//! Route definitions for horoscope content, mounted at `/horoscope`.

use axum::routing::get;
use axum::Router;

use crate::handlers::horoscope;
use crate::state::AppState;

/// Horoscope routes.
///
/// ```text
/// GET  /signs          -> list_signs
/// GET  /signs/{sign}   -> sign_forecast
/// GET  /daily          -> daily_forecast
/// GET  /weekly         -> weekly_forecast
/// GET  /birthdate      -> birth_date_reading (?date=)
/// POST /birthdate      -> birth_date_reading_from_body
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signs", get(horoscope::list_signs))
        .route("/signs/{sign}", get(horoscope::sign_forecast))
        .route("/daily", get(horoscope::daily_forecast))
        .route("/weekly", get(horoscope::weekly_forecast))
        .route(
            "/birthdate",
            get(horoscope::birth_date_reading).post(horoscope::birth_date_reading_from_body),
        )
}
