//! Integration tests for the horoscope endpoints.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, build_test_app_with, get, post_json, post_json_text, post_raw,
    test_config, StubGenerator,
};
use duang_core::error::CoreError;
use serde_json::json;

const DAY_REPLY: &str = r#"{"work":"a","finance":"b","love":"c"}"#;

// ---------------------------------------------------------------------------
// Test: signs listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_signs_returns_all_twelve() {
    let app = build_test_app(StubGenerator::replying(DAY_REPLY));
    let response = get(app, "/api/v1/horoscope/signs").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let signs = json.as_array().unwrap();
    assert_eq!(signs.len(), 12);
    assert_eq!(signs[0], json!({"code": "aries", "label": "Aries"}));
}

// ---------------------------------------------------------------------------
// Test: per-sign forecast
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sign_forecast_returns_bare_object() {
    let generator = StubGenerator::replying(r#"{"Monday": {"work": "w", "finance": "f", "love": "l"}}"#);
    let app = build_test_app(generator.clone());

    let response = get(app, "/api/v1/horoscope/signs/leo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["Monday"]["love"], "l");
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn unknown_sign_returns_404_without_upstream_call() {
    let generator = StubGenerator::replying(DAY_REPLY);
    let app = build_test_app(generator.clone());

    let response = get(app, "/api/v1/horoscope/signs/xx").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNKNOWN_ZODIAC_SIGN");
    assert!(json["error"].as_str().unwrap().contains("xx"));
    assert_eq!(generator.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: general forecasts and caching
// ---------------------------------------------------------------------------

#[tokio::test]
async fn daily_forecast_is_cached_across_requests() {
    let generator = StubGenerator::replying(&format!("```json\n{DAY_REPLY}\n```"));
    let app = build_test_app(generator.clone());

    let first = get(app.clone(), "/api/v1/horoscope/daily").await;
    let second = get(app, "/api/v1/horoscope/daily").await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(
        body_json(second).await,
        json!({"work": "a", "finance": "b", "love": "c"})
    );
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn weekly_forecast_recovers_json_from_prose() {
    let generator = StubGenerator::replying(&format!("Here is your week: {DAY_REPLY} enjoy!"));
    let app = build_test_app(generator);

    let response = get(app, "/api/v1/horoscope/weekly").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["finance"], "b");
}

// ---------------------------------------------------------------------------
// Test: birth date readings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn birth_date_reading_accepts_buddhist_era() {
    let generator = StubGenerator::replying(r#"{"overview": "o", "meta": {}}"#);
    let app = build_test_app(generator);

    let response = get(app, "/api/v1/horoscope/birthdate?date=24/08/2535").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["birth_date"], "1992-08-24");
    assert_eq!(json["meta"]["weekday"], "Monday");
    assert_eq!(json["meta"]["western_zodiac"], "Virgo");
    assert_eq!(json["meta"]["chinese_zodiac"], "Monkey");
    assert_eq!(json["meta"]["age"], 34);
}

#[tokio::test]
async fn birth_date_post_shares_cache_with_get() {
    let generator = StubGenerator::replying(r#"{"overview": "o"}"#);
    let app = build_test_app(generator.clone());

    let via_get = get(app.clone(), "/api/v1/horoscope/birthdate?date=1992-08-24").await;
    let via_post = post_json(
        app,
        "/api/v1/horoscope/birthdate",
        json!({"birth_date": "24/8/2535"}),
    )
    .await;

    assert_eq!(via_get.status(), StatusCode::OK);
    assert_eq!(via_post.status(), StatusCode::OK);
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn invalid_birth_date_returns_400() {
    let generator = StubGenerator::replying(DAY_REPLY);
    let app = build_test_app(generator.clone());

    let response = get(app, "/api/v1/horoscope/birthdate?date=31/04/2000").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_DATE_FORMAT");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn missing_birth_date_returns_400() {
    let app = build_test_app(StubGenerator::replying(DAY_REPLY));

    let response = get(app.clone(), "/api/v1/horoscope/birthdate").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app, "/api/v1/horoscope/birthdate", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn future_birth_date_returns_400() {
    let generator = StubGenerator::replying(DAY_REPLY);
    let app = build_test_app(generator.clone());

    let response = get(app, "/api/v1/horoscope/birthdate?date=2030-01-01").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_DATE_FORMAT");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn mistyped_body_field_returns_400_json() {
    let generator = StubGenerator::replying(DAY_REPLY);
    let app = build_test_app(generator.clone());

    let response = post_json(
        app,
        "/api/v1/horoscope/birthdate",
        json!({"birth_date": 19920824}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn body_without_content_type_returns_400_json() {
    let app = build_test_app(StubGenerator::replying(DAY_REPLY));

    let response = post_raw(
        app,
        "/api/v1/horoscope/birthdate",
        r#"{"birth_date": "1992-08-24"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn malformed_json_body_returns_400_json() {
    let app = build_test_app(StubGenerator::replying(DAY_REPLY));

    let response = post_json_text(app, "/api/v1/horoscope/birthdate", "{").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: upstream failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_credential_returns_500_with_fixed_message() {
    let app = build_test_app(StubGenerator::failing(CoreError::UpstreamUnavailable));

    let response = get(app, "/api/v1/horoscope/daily").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(json["error"], "AI service is not configured");
}

#[tokio::test]
async fn unreadable_ai_output_returns_500() {
    let app = build_test_app(StubGenerator::replying("the stars are silent"));

    let response = get(app, "/api/v1/horoscope/signs/aries").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INVALID_AI_FORMAT");
}

#[tokio::test]
async fn failed_generation_is_cached_for_the_day() {
    let generator = StubGenerator::failing(CoreError::UpstreamFailed("timeout".into()));
    let app = build_test_app(generator.clone());

    for _ in 0..2 {
        let response = get(app.clone(), "/api/v1/horoscope/weekly").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["code"], "UPSTREAM_ERROR");
        assert!(!json["error"].as_str().unwrap().contains("timeout"));
    }
    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn slow_generation_returns_500_json_and_is_cached() {
    let generator = StubGenerator::slow(DAY_REPLY, Duration::from_secs(3));
    let mut config = test_config();
    config.request_timeout_secs = 1;
    let app = build_test_app_with(config, generator.clone());

    let response = get(app.clone(), "/api/v1/horoscope/daily").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");

    let retry = get(app, "/api/v1/horoscope/daily").await;
    assert_eq!(retry.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(generator.calls(), 1);
}
