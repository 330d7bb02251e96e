//! Western and Chinese zodiac resolution plus birth profile derivation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::birth_date::ISO_DATE_FORMAT;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Western zodiac
// ---------------------------------------------------------------------------

/// The twelve Western zodiac signs, in calendar order from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign start dates as `(month, day, sign)`, ascending through the year.
///
/// Dates before the first entry belong to Capricorn, which wraps across
/// the year end.
const SIGN_STARTS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    const ALL: [ZodiacSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// All signs in calendar order from Aries.
    pub fn all() -> &'static [ZodiacSign] {
        &Self::ALL
    }

    /// URL-safe lowercase code, e.g. `"aries"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// Display label, e.g. `"Aries"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Resolve a sign code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        let needle = code.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.code() == needle)
            .ok_or_else(|| CoreError::UnknownZodiacSign(code.to_string()))
    }
}

/// Western zodiac sign for a `(month, day)` pair.
///
/// The latest sign start not after the input wins.
pub fn western_sign(month: u32, day: u32) -> ZodiacSign {
    let mut sign = ZodiacSign::Capricorn;
    for (start_month, start_day, candidate) in SIGN_STARTS {
        if (month, day) >= (start_month, start_day) {
            sign = candidate;
        }
    }
    sign
}

// ---------------------------------------------------------------------------
// Chinese zodiac
// ---------------------------------------------------------------------------

/// Chinese zodiac animals; index 0 is the year 1900.
const CHINESE_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Chinese zodiac animal for a (common-era) year.
pub fn chinese_sign(year: i32) -> &'static str {
    let idx = (year - 1900).rem_euclid(12) as usize;
    CHINESE_ANIMALS[idx]
}

// ---------------------------------------------------------------------------
// Age and weekday
// ---------------------------------------------------------------------------

/// Whole years between `birth` and `today`.
pub fn age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// English weekday name, e.g. `"Monday"`.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// BirthProfile
// ---------------------------------------------------------------------------

/// Facts derived from a birth date, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthProfile {
    pub birth_date: String,
    pub weekday: &'static str,
    pub western_zodiac: &'static str,
    pub chinese_zodiac: &'static str,
    pub age: i32,
}

impl BirthProfile {
    pub fn compute(birth: NaiveDate, today: NaiveDate) -> Self {
        Self {
            birth_date: birth.format(ISO_DATE_FORMAT).to_string(),
            weekday: weekday_label(birth),
            western_zodiac: western_sign(birth.month(), birth.day()).label(),
            chinese_zodiac: chinese_sign(birth.year()),
            age: age(birth, today),
        }
    }
}
