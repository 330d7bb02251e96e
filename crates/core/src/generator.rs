//! Ports between the horoscope service and the AI text provider.

use async_trait::async_trait;

use crate::error::CoreError;

/// Produces raw text for a prompt.
///
/// Implementations own every provider-specific detail (transport,
/// response shapes, credentials) and report failures as [`CoreError`]
/// upstream variants.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CoreError>;
}

/// A provider response that may carry generated text.
pub trait ResponseText {
    /// Full generated text, or `None` when the response has none.
    fn extract_text(&self) -> Option<String>;
}

/// Generator used when no API credential is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, CoreError> {
        Err(CoreError::UpstreamUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn disabled_generator_reports_unavailable() {
        let generator: Box<dyn TextGenerator> = Box::new(DisabledGenerator);
        assert_matches!(
            generator.generate("anything").await,
            Err(CoreError::UpstreamUnavailable)
        );
    }
}
