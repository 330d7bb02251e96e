use std::sync::Arc;
use std::time::Duration;

use duang_core::cache::DailyCache;
use duang_core::clock::SystemClock;
use duang_core::generator::{DisabledGenerator, TextGenerator};
use duang_core::service::HoroscopeService;
use duang_gemini::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Horoscope generation service (owns the daily cache).
    pub horoscope: Arc<HoroscopeService>,
}

impl AppState {
    /// Wire the production service graph from configuration.
    ///
    /// Without an API key the Gemini client is replaced by
    /// [`DisabledGenerator`], so every horoscope request degrades to an
    /// "AI service is not configured" error instead of failing startup.
    /// `REQUEST_TIMEOUT_SECS` bounds each generation.
    pub fn from_config(config: ServerConfig) -> Self {
        let generator: Arc<dyn TextGenerator> = if config.gemini.api_key.is_some() {
            tracing::info!(model = %config.gemini.model, "Gemini text generator enabled");
            Arc::new(GeminiClient::new(config.gemini.clone()))
        } else {
            tracing::warn!("GEMINI_API_KEY not set, horoscope generation disabled");
            Arc::new(DisabledGenerator)
        };

        let horoscope = HoroscopeService::new(
            Arc::new(DailyCache::new(config.error_ttl)),
            generator,
            Arc::new(SystemClock::with_offset_hours(config.utc_offset_hours)),
        )
        .with_generation_timeout(Duration::from_secs(config.request_timeout_secs));

        Self {
            config: Arc::new(config),
            horoscope: Arc::new(horoscope),
        }
    }
}
