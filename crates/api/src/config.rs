use std::time::Duration;

use duang_gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use duang_gemini::GeminiConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Without
/// `GEMINI_API_KEY` the server still starts; horoscope endpoints answer
/// with an "AI service is not configured" error.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Timeout in seconds for catalog requests and for each horoscope
    /// generation (default: `60`).
    pub request_timeout_secs: u64,
    /// AI provider settings.
    pub gemini: GeminiConfig,
    /// Lifetime of a cached error result; `None` keeps errors all day.
    pub error_ttl: Option<Duration>,
    /// Offset from UTC, in hours, used to decide what "today" is (default: `7`).
    pub utc_offset_hours: i32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `60`                       |
    /// | `GEMINI_API_KEY`           | unset                      |
    /// | `GEMINI_MODEL`             | `gemini-1.5-flash`         |
    /// | `GEMINI_BASE_URL`          | Google v1beta endpoint     |
    /// | `HOROSCOPE_ERROR_TTL_SECS` | `300` (`off` = whole day)  |
    /// | `CLOCK_UTC_OFFSET_HOURS`   | `7`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            base_url: std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        };

        let error_ttl = parse_error_ttl(
            &std::env::var("HOROSCOPE_ERROR_TTL_SECS").unwrap_or_else(|_| "300".into()),
        );

        let utc_offset_hours: i32 = std::env::var("CLOCK_UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| "7".into())
            .parse()
            .expect("CLOCK_UTC_OFFSET_HOURS must be a valid i32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini,
            error_ttl,
            utc_offset_hours,
        }
    }
}

/// `off` disables error expiry; anything else must be whole seconds.
fn parse_error_ttl(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("off") {
        return None;
    }
    let secs: u64 = raw
        .parse()
        .expect("HOROSCOPE_ERROR_TTL_SECS must be a valid u64 or `off`");
    Some(Duration::from_secs(secs))
}
