//! Day-scoped horoscope cache with single-flight computation.
//!
//! Keys carry the calendar date, so entries from previous days are never
//! looked up again; they age out after [`ENTRY_LIFETIME`]. Failed results
//! get their own, shorter expiry so a flaky provider is retried later in
//! the day without being hit on every request.
//!
//! Concurrent first requests for one key are coalesced by
//! [`moka::future::Cache::get_with`]: only one caller reaches the upstream
//! provider while the others wait for its result.

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

use moka::future::Cache;
use moka::Expiry;
use serde_json::Value;

use crate::error::CoreError;

/// Outcome of one horoscope generation, success or failure.
pub type HoroscopeResult = Result<Value, CoreError>;

/// Default lifetime of a cached error result.
pub const DEFAULT_ERROR_TTL: Duration = Duration::from_secs(300);

/// Upper bound on any entry's lifetime. A key cannot be requested again
/// once its date has passed.
pub const ENTRY_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Maximum number of cached results.
const MAX_CACHE_ENTRIES: u64 = 10_000;

// ---------------------------------------------------------------------------
// CacheKey
// ---------------------------------------------------------------------------

/// The four kinds of horoscope content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    PerSign,
    DailyGeneral,
    WeeklyGeneral,
    PerBirthDate,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerSign => "per_sign",
            Self::DailyGeneral => "daily_general",
            Self::WeeklyGeneral => "weekly_general",
            Self::PerBirthDate => "per_birth_date",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key: content kind, subject (sign code, ISO birth date, or
/// empty), and the ISO date the entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: ContentKind,
    subject: String,
    date: String,
}

impl CacheKey {
    pub fn new(kind: ContentKind, subject: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            date: date.into(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.subject, self.date)
    }
}

// ---------------------------------------------------------------------------
// DailyCache
// ---------------------------------------------------------------------------

/// Per-entry expiry: successes live for the day, errors for `error_ttl`.
struct ResultExpiry {
    error_ttl: Option<Duration>,
}

impl Expiry<CacheKey, HoroscopeResult> for ResultExpiry {
    fn expire_after_create(
        &self,
        _key: &CacheKey,
        value: &HoroscopeResult,
        _created_at: Instant,
    ) -> Option<Duration> {
        match value {
            Ok(_) => Some(ENTRY_LIFETIME),
            Err(_) => Some(self.error_ttl.unwrap_or(ENTRY_LIFETIME).min(ENTRY_LIFETIME)),
        }
    }
}

/// Process-wide store of generated horoscopes.
pub struct DailyCache {
    inner: Cache<CacheKey, HoroscopeResult>,
}

impl DailyCache {
    /// Create a cache. Error results expire after `error_ttl`; `None`
    /// keeps them for as long as successes.
    pub fn new(error_ttl: Option<Duration>) -> Self {
        let inner = Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .expire_after(ResultExpiry { error_ttl })
            .build();
        Self { inner }
    }

    /// Return the cached result for `key`, or run `compute`, store its
    /// result, and return it.
    pub async fn get_or_compute<F, Fut>(&self, key: CacheKey, compute: F) -> HoroscopeResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = HoroscopeResult>,
    {
        let label = key.to_string();
        self.inner
            .get_with(key, async move {
                tracing::info!(key = %label, "Horoscope cache miss");
                compute().await
            })
            .await
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count() as usize
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for DailyCache {
    fn default() -> Self {
        Self::new(Some(DEFAULT_ERROR_TTL))
    }
}
