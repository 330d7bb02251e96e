//! Birth date normalization.
//!
//! Accepts `YYYY-MM-DD` or `D/M/YYYY` (one or two digit day and month).
//! Slash-form years of [`BUDDHIST_ERA_THRESHOLD`] or later are read as
//! Buddhist-era years and shifted back by [`BUDDHIST_ERA_OFFSET`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CoreError;

/// Difference between Buddhist-era and common-era year numbering.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Slash-form years at or above this value are treated as Buddhist era.
pub const BUDDHIST_ERA_THRESHOLD: i32 = 2400;

/// Canonical output format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid regex"));

static SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid regex"));

/// Parse a user-supplied birth date into a common-era calendar date.
///
/// Surrounding whitespace is ignored; an empty string fails like any other
/// malformed input.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, CoreError> {
    let raw = input.trim();
    let invalid = || CoreError::InvalidDateFormat(raw.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    let (year, month, day) = if let Some(caps) = ISO_RE.captures(raw) {
        (
            caps[1].parse::<i32>().map_err(|_| invalid())?,
            caps[2].parse::<u32>().map_err(|_| invalid())?,
            caps[3].parse::<u32>().map_err(|_| invalid())?,
        )
    } else if let Some(caps) = SLASH_RE.captures(raw) {
        let mut year = caps[3].parse::<i32>().map_err(|_| invalid())?;
        if year >= BUDDHIST_ERA_THRESHOLD {
            year -= BUDDHIST_ERA_OFFSET;
        }
        (
            year,
            caps[2].parse::<u32>().map_err(|_| invalid())?,
            caps[1].parse::<u32>().map_err(|_| invalid())?,
        )
    } else {
        return Err(invalid());
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Normalize a birth date string to canonical `YYYY-MM-DD`.
pub fn normalize_birth_date(input: &str) -> Result<String, CoreError> {
    parse_birth_date(input).map(|d| d.format(ISO_DATE_FORMAT).to_string())
}
