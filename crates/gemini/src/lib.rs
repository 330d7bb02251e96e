//! Gemini adapter for the horoscope text generator port.
//!
//! All knowledge of the provider's request and response shapes lives in
//! this crate; `duang-core` only sees [`duang_core::generator::TextGenerator`].

pub mod client;
pub mod response;

pub use client::{GeminiApiError, GeminiClient, GeminiConfig};
