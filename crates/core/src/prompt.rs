//! Generation prompts for each horoscope content kind.
//!
//! Every prompt asks the model for a single JSON object and nothing else.
//! Keys stay English so the response schema is stable; narrative values are
//! requested in Thai for the site audience.

use chrono::NaiveDate;

use crate::birth_date::ISO_DATE_FORMAT;
use crate::zodiac::{BirthProfile, ZodiacSign};

/// Weekday keys used by the seven-day schemas, Monday first.
pub const WEEKDAY_KEYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const JSON_ONLY: &str = "Respond with a single JSON object only. Do not add any text before or after it and do not wrap it in code fences.";

const LANGUAGE: &str = "Write every string value in Thai. Keep all JSON keys in English exactly as shown.";

/// What a prompt is about.
#[derive(Debug, Clone, Copy)]
pub enum PromptSubject<'a> {
    /// Seven-day forecast for one Western sign.
    Sign(ZodiacSign),
    /// Single-day forecast with no subject.
    Daily,
    /// Seven-day forecast with no subject.
    Weekly,
    /// Personal reading derived from a birth date.
    BirthDate(&'a BirthProfile),
}

/// Build the generation prompt for `subject` as of `today`.
pub fn build_prompt(subject: PromptSubject<'_>, today: NaiveDate) -> String {
    let today = today.format(ISO_DATE_FORMAT);
    match subject {
        PromptSubject::Sign(sign) => format!(
            "You are an astrologer. Write the horoscope for the zodiac sign {label} for the \
             seven days of the week starting {today}.\n\
             {JSON_ONLY}\n{LANGUAGE}\n\
             Schema:\n{schema}",
            label = sign.label(),
            schema = week_schema(),
        ),
        PromptSubject::Daily => format!(
            "You are an astrologer. Write a general horoscope for {today} that applies to \
             everyone.\n\
             {JSON_ONLY}\n{LANGUAGE}\n\
             Schema:\n{schema}",
            schema = DAY_SCHEMA,
        ),
        PromptSubject::Weekly => format!(
            "You are an astrologer. Write a general horoscope for the seven days of the week \
             starting {today} that applies to everyone.\n\
             {JSON_ONLY}\n{LANGUAGE}\n\
             Schema:\n{schema}",
            schema = week_schema(),
        ),
        PromptSubject::BirthDate(profile) => format!(
            "You are an astrologer. Give a personal reading as of {today} for someone born on \
             {birth} (a {weekday}), Western zodiac {western}, Chinese zodiac {chinese}, \
             currently {age} years old.\n\
             {JSON_ONLY}\n{LANGUAGE}\n\
             Schema:\n\
             {{\"meta\": {{\"birth_date\": \"{birth}\", \"weekday\": \"{weekday}\", \
             \"western_zodiac\": \"{western}\", \"chinese_zodiac\": \"{chinese}\", \
             \"age\": {age}}}, \
             \"overview\": \"...\", \"personality\": \"...\", \"work\": \"...\", \
             \"finance\": \"...\", \"love\": \"...\", \"health\": \"...\", \
             \"lucky\": {{\"color\": \"...\", \"numbers\": [1, 2], \"days\": [\"...\"]}}, \
             \"advice\": \"...\"}}",
            birth = profile.birth_date,
            weekday = profile.weekday,
            western = profile.western_zodiac,
            chinese = profile.chinese_zodiac,
            age = profile.age,
        ),
    }
}

const DAY_SCHEMA: &str = r#"{"work": "...", "finance": "...", "love": "..."}"#;

fn week_schema() -> String {
    let days: Vec<String> = WEEKDAY_KEYS
        .iter()
        .map(|day| format!("\"{day}\": {DAY_SCHEMA}"))
        .collect();
    format!("{{{}}}", days.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn sign_prompt_names_sign_and_every_weekday() {
        let prompt = build_prompt(PromptSubject::Sign(ZodiacSign::Leo), today());
        assert!(prompt.contains("Leo"));
        for day in WEEKDAY_KEYS {
            assert!(prompt.contains(&format!("\"{day}\"")), "missing {day}");
        }
        assert!(prompt.contains("2026-10-18"));
    }

    #[test]
    fn daily_prompt_uses_flat_schema() {
        let prompt = build_prompt(PromptSubject::Daily, today());
        assert!(prompt.contains(DAY_SCHEMA));
        assert!(!prompt.contains("\"Monday\""));
    }

    #[test]
    fn weekly_prompt_uses_week_schema() {
        let prompt = build_prompt(PromptSubject::Weekly, today());
        assert!(prompt.contains("\"Sunday\": {\"work\""));
    }

    #[test]
    fn every_prompt_demands_json_only() {
        let profile = BirthProfile::compute(
            NaiveDate::from_ymd_opt(1992, 8, 24).unwrap(),
            today(),
        );
        for subject in [
            PromptSubject::Sign(ZodiacSign::Aries),
            PromptSubject::Daily,
            PromptSubject::Weekly,
            PromptSubject::BirthDate(&profile),
        ] {
            assert!(build_prompt(subject, today()).contains(JSON_ONLY));
        }
    }

    #[test]
    fn birth_date_prompt_embeds_profile() {
        let profile = BirthProfile::compute(
            NaiveDate::from_ymd_opt(1992, 8, 24).unwrap(),
            today(),
        );
        let prompt = build_prompt(PromptSubject::BirthDate(&profile), today());
        assert!(prompt.contains("\"birth_date\": \"1992-08-24\""));
        assert!(prompt.contains("\"western_zodiac\": \"Virgo\""));
        assert!(prompt.contains("\"chinese_zodiac\": \"Monkey\""));
        assert!(prompt.contains("\"age\": 34"));
        assert!(prompt.contains("\"lucky\""));
        assert!(prompt.contains("\"advice\""));
    }

    #[test]
    fn prompts_are_deterministic() {
        assert_eq!(
            build_prompt(PromptSubject::Weekly, today()),
            build_prompt(PromptSubject::Weekly, today())
        );
    }
}
