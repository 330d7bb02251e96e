//! Domain logic for the Duang site: horoscope generation with a day-scoped
//! cache, zodiac and birth date helpers, and the live channel catalog.
//!
//! Nothing in this crate performs network I/O directly; the AI provider is
//! reached through the [`generator::TextGenerator`] port.

pub mod birth_date;
pub mod cache;
pub mod channels;
pub mod clock;
pub mod error;
pub mod extract;
pub mod generator;
pub mod prompt;
pub mod service;
pub mod zodiac;
