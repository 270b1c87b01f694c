use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::{DomainError, Horoscope, ZodiacSign};

/// Sampling temperature sent with every horoscope prompt.
pub const HOROSCOPE_TEMPERATURE: f32 = 0.7;

const SIGN_PLACEHOLDER: &str = "{zodiac_sign}";

/// Prompt sent to the text generator; `{zodiac_sign}` is replaced by the sign label.
pub const HOROSCOPE_PROMPT_TEMPLATE: &str = "\
You are a professional fortune teller. Give a detailed horoscope for the zodiac sign {zodiac_sign}.
The horoscope should include predictions for career, love, and health.";

pub fn render_prompt(sign: ZodiacSign) -> String {
    HOROSCOPE_PROMPT_TEMPLATE.replace(SIGN_PLACEHOLDER, sign.as_str())
}

pub struct RequestHoroscopeUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl RequestHoroscopeUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the text generator for a horoscope. Makes exactly one call and
    /// returns its text unmodified.
    pub async fn execute(&self, sign: ZodiacSign) -> Result<Horoscope, DomainError> {
        let prompt = render_prompt(sign);
        debug!("Requesting horoscope for {}", sign);

        let text = self
            .generator
            .complete(&prompt, HOROSCOPE_TEMPERATURE)
            .await
            .map_err(|e| {
                warn!("Horoscope generation for {} failed: {}", sign, e);
                if e.is_upstream() {
                    e
                } else {
                    DomainError::upstream(e.message())
                }
            })?;

        Ok(Horoscope::new(sign, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockTextGenerator;

    #[test]
    fn test_render_prompt_substitutes_label() {
        for sign in ZodiacSign::ALL {
            let prompt = render_prompt(sign);
            assert!(prompt.contains(&format!("zodiac sign {}.", sign.as_str())));
            assert!(!prompt.contains(SIGN_PLACEHOLDER));
        }
    }

    #[test]
    fn test_prompt_asks_for_career_love_and_health() {
        let prompt = render_prompt(ZodiacSign::Leo);
        assert!(prompt.starts_with("You are a professional fortune teller."));
        assert!(prompt.contains("career, love, and health"));
    }

    #[tokio::test]
    async fn test_returns_generated_text_verbatim() {
        let generator = Arc::new(MockTextGenerator::new("  Stars align.\n"));
        let use_case = RequestHoroscopeUseCase::new(generator.clone());

        let horoscope = use_case.execute(ZodiacSign::Gemini).await.unwrap();

        assert_eq!(horoscope.zodiac_sign(), ZodiacSign::Gemini);
        assert_eq!(horoscope.text(), "  Stars align.\n");
        assert_eq!(generator.calls(), vec![(render_prompt(ZodiacSign::Gemini), 0.7)]);
    }

    #[tokio::test]
    async fn test_generator_failure_is_upstream_error() {
        let generator = Arc::new(MockTextGenerator::failing("invalid api key"));
        let use_case = RequestHoroscopeUseCase::new(generator.clone());

        let err = use_case.execute(ZodiacSign::Aries).await.unwrap_err();

        assert!(err.is_upstream());
        assert_eq!(err.message(), "invalid api key");
        assert_eq!(generator.calls().len(), 1);
    }
}
