#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use duang_api::config::ServerConfig;
use duang_api::router::build_app_router;
use duang_api::state::AppState;
use duang_core::cache::DailyCache;
use duang_core::clock::FixedClock;
use duang_core::error::CoreError;
use duang_core::generator::TextGenerator;
use duang_core::service::HoroscopeService;
use duang_gemini::GeminiConfig;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gemini: GeminiConfig {
            api_key: Some("test-key".to_string()),
            ..GeminiConfig::default()
        },
        error_ttl: None,
        utc_offset_hours: 7,
    }
}

/// The date every test app believes is today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Generator that returns a canned reply and counts calls.
pub struct StubGenerator {
    reply: Result<String, CoreError>,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::build(Ok(text.to_string()), Duration::ZERO)
    }

    pub fn failing(err: CoreError) -> Arc<Self> {
        Self::build(Err(err), Duration::ZERO)
    }

    /// Replies with `text`, but only after `delay`.
    pub fn slow(text: &str, delay: Duration) -> Arc<Self> {
        Self::build(Ok(text.to_string()), delay)
    }

    fn build(reply: Result<String, CoreError>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.reply.clone()
    }
}

/// Build the full application router around `generator`, with the clock
/// pinned to [`today`].
pub fn build_test_app(generator: Arc<dyn TextGenerator>) -> Router {
    build_test_app_with(test_config(), generator)
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with(config: ServerConfig, generator: Arc<dyn TextGenerator>) -> Router {
    let horoscope = HoroscopeService::new(
        Arc::new(DailyCache::new(config.error_ttl)),
        generator,
        Arc::new(FixedClock(today())),
    )
    .with_generation_timeout(Duration::from_secs(config.request_timeout_secs));
    let state = AppState {
        config: Arc::new(config.clone()),
        horoscope: Arc::new(horoscope),
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_json_text(app, uri, &body.to_string()).await
}

/// Send a POST request declared as JSON, with `body` sent verbatim.
pub async fn post_json_text(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a raw body and no `Content-Type` header.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
