//! Horoscope generation flow.
//!
//! Request → (birth date normalization, zodiac resolution) → daily cache
//! lookup → on miss: prompt → text generator → JSON extraction → cache
//! insert. Caller-input errors are raised before the cache is touched.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::birth_date::{parse_birth_date, ISO_DATE_FORMAT};
use crate::cache::{CacheKey, ContentKind, DailyCache, HoroscopeResult};
use crate::clock::Clock;
use crate::error::CoreError;
use crate::extract::extract_json;
use crate::generator::TextGenerator;
use crate::prompt::{build_prompt, PromptSubject};
use crate::zodiac::{BirthProfile, ZodiacSign};

/// Entry point for every kind of horoscope content.
///
/// Cheap to share behind an `Arc`; all state lives in the injected cache.
pub struct HoroscopeService {
    cache: Arc<DailyCache>,
    generator: Arc<dyn TextGenerator>,
    clock: Arc<dyn Clock>,
    generation_timeout: Option<Duration>,
}

impl HoroscopeService {
    pub fn new(
        cache: Arc<DailyCache>,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            generator,
            clock,
            generation_timeout: None,
        }
    }

    /// Bound each upstream generation. A generation that runs past `limit`
    /// fails with [`CoreError::UpstreamFailed`] and is cached like any
    /// other upstream error.
    pub fn with_generation_timeout(mut self, limit: Duration) -> Self {
        self.generation_timeout = Some(limit);
        self
    }

    /// Seven-day forecast for the sign with the given code.
    pub async fn sign_forecast(&self, code: &str) -> HoroscopeResult {
        let sign = ZodiacSign::from_code(code)?;
        let today = self.clock.today();
        let key = CacheKey::new(ContentKind::PerSign, sign.code(), iso(today));
        let prompt = build_prompt(PromptSubject::Sign(sign), today);
        self.cached(key, prompt, None).await
    }

    /// Today's general forecast.
    pub async fn daily_forecast(&self) -> HoroscopeResult {
        let today = self.clock.today();
        let key = CacheKey::new(ContentKind::DailyGeneral, "", iso(today));
        let prompt = build_prompt(PromptSubject::Daily, today);
        self.cached(key, prompt, None).await
    }

    /// This week's general forecast.
    pub async fn weekly_forecast(&self) -> HoroscopeResult {
        let today = self.clock.today();
        let key = CacheKey::new(ContentKind::WeeklyGeneral, "", iso(today));
        let prompt = build_prompt(PromptSubject::Weekly, today);
        self.cached(key, prompt, None).await
    }

    /// Personal reading for a birth date in `YYYY-MM-DD` or `D/M/YYYY` form.
    ///
    /// The result's `meta` block is completed from the computed
    /// [`BirthProfile`] wherever the model left a field out. Dates after
    /// today are rejected.
    pub async fn birth_date_reading(&self, input: &str) -> HoroscopeResult {
        let birth = parse_birth_date(input)?;
        let today = self.clock.today();
        if birth > today {
            return Err(CoreError::InvalidDateFormat(input.trim().to_string()));
        }
        let profile = BirthProfile::compute(birth, today);
        let key = CacheKey::new(
            ContentKind::PerBirthDate,
            profile.birth_date.clone(),
            iso(today),
        );
        let prompt = build_prompt(PromptSubject::BirthDate(&profile), today);
        self.cached(key, prompt, Some(&profile)).await
    }

    /// Number of cached results (all days).
    pub async fn cached_entries(&self) -> usize {
        self.cache.len().await
    }

    async fn cached(
        &self,
        key: CacheKey,
        prompt: String,
        profile: Option<&BirthProfile>,
    ) -> HoroscopeResult {
        let kind = key.kind();
        self.cache
            .get_or_compute(key, || async move {
                let text = self.generate(&prompt).await.inspect_err(|e| {
                    tracing::warn!(kind = %kind, error = %e, "Horoscope generation failed");
                })?;

                let mut value = extract_json(&text).inspect_err(|e| {
                    tracing::warn!(kind = %kind, error = %e, "Unusable horoscope response");
                })?;

                if let Some(profile) = profile {
                    fill_profile_defaults(&mut value, profile);
                }
                Ok(value)
            })
            .await
    }

    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        let Some(limit) = self.generation_timeout else {
            return self.generator.generate(prompt).await;
        };
        tokio::time::timeout(limit, self.generator.generate(prompt))
            .await
            .unwrap_or_else(|_| {
                Err(CoreError::UpstreamFailed(format!(
                    "no response within {limit:?}"
                )))
            })
    }
}

fn iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Fill missing or blank `meta` fields from the computed profile.
fn fill_profile_defaults(value: &mut Value, profile: &BirthProfile) {
    let Some(root) = value.as_object_mut() else {
        return;
    };

    let meta = root
        .entry("meta")
        .or_insert_with(|| Value::Object(Map::new()));
    if !meta.is_object() {
        *meta = Value::Object(Map::new());
    }
    let Some(meta) = meta.as_object_mut() else {
        return;
    };

    let defaults = [
        ("birth_date", Value::from(profile.birth_date.as_str())),
        ("weekday", Value::from(profile.weekday)),
        ("western_zodiac", Value::from(profile.western_zodiac)),
        ("chinese_zodiac", Value::from(profile.chinese_zodiac)),
        ("age", Value::from(profile.age)),
    ];
    for (field, default) in defaults {
        let missing = match meta.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };
        if missing {
            meta.insert(field.to_string(), default);
        }
    }
}
