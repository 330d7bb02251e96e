/// Domain errors raised by the horoscope pipeline and the channel catalog.
///
/// `Clone` so failed generations can be stored in the daily cache alongside
/// successful ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Birth date missing, malformed, or not a real calendar date.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Sign code outside the twelve Western zodiac signs.
    #[error("Unknown zodiac sign: {0}")]
    UnknownZodiacSign(String),

    /// Channel id not present in the live catalog.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// No API credential configured for the AI provider.
    #[error("AI service is not configured")]
    UpstreamUnavailable,

    /// The provider answered but no usable text could be extracted.
    #[error("AI service returned an empty response")]
    UpstreamEmpty,

    /// Transport fault or non-2xx answer from the provider.
    #[error("AI service request failed: {0}")]
    UpstreamFailed(String),

    /// Text came back but no JSON object could be decoded from it.
    #[error("AI response is not valid JSON: {0}")]
    InvalidAiFormat(String),
}

impl CoreError {
    /// Whether the error was caused by the caller's input rather than the
    /// upstream provider.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateFormat(_) | Self::UnknownZodiacSign(_) | Self::UnknownChannel(_)
        )
    }
}
